//! Style expressions for the walkability map layers.
//!
//! [`build_match`] colours features by a categorical property, [`build_step`]
//! by a numeric one. [`palette`] holds the tables the map actually uses.

pub mod error;
pub mod expression;
pub mod matching;
pub mod palette;
pub mod ramp;

pub use error::StyleError;
pub use expression::Expression;
pub use matching::build_match;
pub use ramp::{LegendEntry, build_step, ramp_legend};
