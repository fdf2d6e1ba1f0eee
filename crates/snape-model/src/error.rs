use thiserror::Error;

/// A token was not a member of an [`EnumDomain`](crate::EnumDomain).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{token} isn't in {}", allowed.join(","))]
pub struct InvalidEnumValue {
    /// The rejected token, verbatim.
    pub token: String,
    /// Every value the domain accepts, in domain order.
    pub allowed: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid feature collection: {0}")]
    InvalidGeoJson(#[from] serde_json::Error),
    #[error("expected a FeatureCollection, found type {0:?}")]
    NotFeatureCollection(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
