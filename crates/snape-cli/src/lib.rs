//! CLI library components for the walkability map tooling.

pub mod logging;
pub mod tools;
