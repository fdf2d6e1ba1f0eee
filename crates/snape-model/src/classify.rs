//! Footpath classification for styling.
//!
//! Every path feature gets exactly one [`Category`]. Real OSM tagging is not
//! mutually exclusive (an indoor footway can also sit on a bridge), so the
//! rules run in a fixed priority order and the first match wins.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::InvalidEnumValue;
use crate::feature::{Feature, FeatureCollection, TagValue, Tags};

/// Property the category label is written to.
pub const CATEGORY_PROPERTY: &str = "type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "crossing")]
    Crossing,
    #[serde(rename = "indoors footway")]
    IndoorFootway,
    #[serde(rename = "footway not on the ground")]
    ElevatedOrUndergroundFootway,
    #[serde(rename = "footway")]
    Footway,
    #[serde(rename = "sidewalk")]
    Sidewalk,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Crossing,
        Category::IndoorFootway,
        Category::ElevatedOrUndergroundFootway,
        Category::Footway,
        Category::Sidewalk,
    ];

    /// The label stored on features and matched by style expressions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Crossing => "crossing",
            Category::IndoorFootway => "indoors footway",
            Category::ElevatedOrUndergroundFootway => "footway not on the ground",
            Category::Footway => "footway",
            Category::Sidewalk => "sidewalk",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| InvalidEnumValue {
                token: s.to_string(),
                allowed: Category::ALL
                    .iter()
                    .map(|category| category.as_str().to_string())
                    .collect(),
            })
    }
}

/// Decides the category of a set of tags without touching them.
pub fn category_of(tags: &Tags) -> Category {
    let is = |value: &Option<TagValue>, expected: &str| {
        value.as_ref().is_some_and(|value| value.is(expected))
    };
    let truthy = |value: &Option<TagValue>| value.as_ref().is_some_and(TagValue::is_truthy);

    if tags.crossing.is_some() || is(&tags.highway, "crossing") || is(&tags.footway, "crossing") {
        return Category::Crossing;
    }
    if is(&tags.highway, "footway") {
        if truthy(&tags.indoor) {
            return Category::IndoorFootway;
        }
        if truthy(&tags.layer) || truthy(&tags.bridge) || truthy(&tags.tunnel) {
            return Category::ElevatedOrUndergroundFootway;
        }
        return Category::Footway;
    }
    Category::Sidewalk
}

/// Classifies a feature and records the result in its properties.
pub fn classify(feature: &mut Feature) -> Category {
    let category = category_of(&feature.properties);
    feature.properties.other.insert(
        CATEGORY_PROPERTY.to_string(),
        Value::String(category.as_str().to_string()),
    );
    category
}

/// Reads back a category previously written by [`classify`].
pub fn assigned_category(feature: &Feature) -> Option<Category> {
    feature
        .properties
        .other
        .get(CATEGORY_PROPERTY)
        .and_then(Value::as_str)
        .and_then(|label| label.parse().ok())
}

/// Number of features per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.counts.iter().map(|(category, count)| (*category, *count))
    }

    fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }
}

/// Classifies every feature in a collection.
pub fn classify_all(collection: &mut FeatureCollection) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for feature in &mut collection.features {
        counts.record(classify(feature));
    }
    debug!(
        features = counts.total(),
        crossings = counts.get(Category::Crossing),
        "classified path features"
    );
    counts
}
