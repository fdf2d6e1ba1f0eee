//! GeoJSON feature records with typed OSM tags.
//!
//! Only the tags the classifier looks at get their own field. Everything else
//! in `properties` lands in [`Tags::other`], and everything outside
//! `properties` (geometry, id, foreign members) is kept verbatim in
//! [`Feature::rest`], so a classified collection serializes back with nothing
//! lost.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{ModelError, Result};

/// The value of a single known tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Bool(bool),
    Number(Number),
    Text(String),
    /// `null`, arrays and objects, kept as written.
    Other(Value),
}

impl TagValue {
    /// Presence-style truthiness: `false`, `0`, `""` and `null` are false,
    /// anything else (including the string `"no"` and any array) is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            TagValue::Bool(value) => *value,
            TagValue::Number(number) => number_is_truthy(number),
            TagValue::Text(text) => !text.is_empty(),
            TagValue::Other(value) => match value {
                Value::Null => false,
                Value::Bool(value) => *value,
                Value::Number(number) => number_is_truthy(number),
                Value::String(text) => !text.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }

    /// True if this is the text `expected`.
    pub fn is(&self, expected: &str) -> bool {
        matches!(self, TagValue::Text(text) if text == expected)
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}

impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        TagValue::Bool(value)
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Number(value.into())
    }
}

impl From<TagValue> for Value {
    fn from(value: TagValue) -> Self {
        match value {
            TagValue::Bool(value) => Value::Bool(value),
            TagValue::Number(number) => Value::Number(number),
            TagValue::Text(text) => Value::String(text),
            TagValue::Other(value) => value,
        }
    }
}

fn number_is_truthy(number: &Number) -> bool {
    number
        .as_f64()
        .is_some_and(|value| value != 0.0 && !value.is_nan())
}

/// The `properties` object of a path feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tags {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub highway: Option<TagValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub footway: Option<TagValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub crossing: Option<TagValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub indoor: Option<TagValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub layer: Option<TagValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub bridge: Option<TagValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tunnel: Option<TagValue>,
    /// Unrecognized tags and derived properties.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds tags from `key=value` pairs. A pair without `=` sets the key to
    /// `true`.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Self::new();
        for pair in pairs {
            match pair.as_ref().split_once('=') {
                Some((key, value)) => tags.insert(key, value),
                None => tags.insert(pair.as_ref(), true),
            }
        }
        tags
    }

    /// Sets a tag, routing known keys to their typed field.
    pub fn insert(&mut self, key: &str, value: impl Into<TagValue>) {
        let value = value.into();
        match self.known_slot(key) {
            Some(slot) => *slot = Some(value),
            None => {
                self.other.insert(key.to_string(), value.into());
            }
        }
    }

    /// True if `key` is present in any form.
    pub fn has(&self, key: &str) -> bool {
        match key {
            "highway" => self.highway.is_some(),
            "footway" => self.footway.is_some(),
            "crossing" => self.crossing.is_some(),
            "indoor" => self.indoor.is_some(),
            "layer" => self.layer.is_some(),
            "bridge" => self.bridge.is_some(),
            "tunnel" => self.tunnel.is_some(),
            _ => self.other.contains_key(key),
        }
    }

    fn known_slot(&mut self, key: &str) -> Option<&mut Option<TagValue>> {
        match key {
            "highway" => Some(&mut self.highway),
            "footway" => Some(&mut self.footway),
            "crossing" => Some(&mut self.crossing),
            "indoor" => Some(&mut self.indoor),
            "layer" => Some(&mut self.layer),
            "bridge" => Some(&mut self.bridge),
            "tunnel" => Some(&mut self.tunnel),
            _ => None,
        }
    }
}

/// A single GeoJSON feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Tags,
    /// `type`, `geometry`, `id` and any foreign members.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Feature {
    pub fn new(properties: Tags) -> Self {
        let mut rest = Map::new();
        rest.insert("type".to_string(), Value::String("Feature".to_string()));
        rest.insert("geometry".to_string(), Value::Null);
        Self { properties, rest }
    }
}

/// A GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
    #[serde(flatten)]
    pub foreign_members: Map<String, Value>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
            foreign_members: Map::new(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let collection: FeatureCollection = serde_json::from_str(text)?;
        if collection.kind != "FeatureCollection" {
            return Err(ModelError::NotFeatureCollection(collection.kind));
        }
        Ok(collection)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A known tag that appears in `properties` is present even when its value
/// is `null`; only a missing key leaves the field empty.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<TagValue>, D::Error>
where
    D: Deserializer<'de>,
{
    TagValue::deserialize(deserializer).map(Some)
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
