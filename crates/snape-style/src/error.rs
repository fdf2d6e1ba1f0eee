use thiserror::Error;

/// Builder inputs that the rendering library would reject or misdraw.
///
/// These are programming errors in static style tables, expected to surface
/// in tests rather than at runtime.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum StyleError {
    #[error("match expression needs at least one label")]
    EmptyMapping,

    #[error("duplicate match label {0:?}")]
    DuplicateLabel(String),

    #[error("color scale is empty")]
    EmptyColorScale,

    #[error("{thresholds} thresholds need {} colors, got {colors}", thresholds.saturating_sub(1))]
    LengthMismatch { thresholds: usize, colors: usize },

    #[error("threshold {index} is not finite")]
    NonFiniteThreshold { index: usize },

    #[error("threshold {index} ({value}) is not above the previous one ({previous})")]
    NotAscending {
        index: usize,
        previous: f64,
        value: f64,
    },
}
