//! Closed sets of string tokens and strict validators over them.
//!
//! URL parameters such as `profile=USA` arrive as free text. An [`EnumDomain`]
//! holds the tokens a parameter may take and rejects everything else with an
//! [`InvalidEnumValue`] that names both the offending token and the allowed set.

use std::sync::Arc;

use crate::error::InvalidEnumValue;

/// A fixed, ordered set of allowed tokens.
///
/// Matching is exact: no trimming and no case folding, so a validated token can
/// be written back into a URL unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDomain {
    values: Arc<[String]>,
}

impl EnumDomain {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !ordered.contains(&value) {
                ordered.push(value);
            }
        }
        Self {
            values: ordered.into(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, token: &str) -> bool {
        self.values.iter().any(|value| value == token)
    }

    /// Returns `token` unchanged when it belongs to the domain.
    pub fn validate(&self, token: &str) -> Result<String, InvalidEnumValue> {
        if self.contains(token) {
            return Ok(token.to_string());
        }
        Err(InvalidEnumValue {
            token: token.to_string(),
            allowed: self.values.to_vec(),
        })
    }

    /// Builds a standalone parser over a snapshot of this domain.
    pub fn validator(&self) -> impl Fn(&str) -> Result<String, InvalidEnumValue> + Clone + use<> {
        let domain = self.clone();
        move |token| domain.validate(token)
    }
}

/// Shorthand for `EnumDomain::new(values).validator()`.
pub fn enum_validator<I, S>(
    values: I,
) -> impl Fn(&str) -> Result<String, InvalidEnumValue> + Clone + use<I, S>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    EnumDomain::new(values).validator()
}
