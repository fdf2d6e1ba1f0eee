//! Error types for state cells and URL synchronization.

use std::num::{ParseFloatError, ParseIntError};

use snape_model::InvalidEnumValue;
use thiserror::Error;

/// A query parameter could not be turned back into a value.
///
/// These are recovered where they happen: the cell falls back to its default
/// and the failure is logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error(transparent)]
    InvalidEnum(#[from] InvalidEnumValue),

    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseFloatError),

    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("malformed value {value:?}: {reason}")]
    Malformed { value: String, reason: &'static str },

    #[error("unknown parameter {0:?}")]
    UnknownParam(String),
}

impl ParseError {
    pub fn malformed(value: &str, reason: &'static str) -> Self {
        Self::Malformed {
            value: value.to_string(),
            reason,
        }
    }
}

/// The address bar was given something that isn't an absolute URL.
#[derive(Debug, Error)]
#[error("invalid location {href:?}: {source}")]
pub struct LocationError {
    pub href: String,
    #[source]
    pub source: url::ParseError,
}
