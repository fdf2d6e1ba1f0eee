//! Static colour tables used by the map layers.

use snape_model::{CATEGORY_PROPERTY, Category, RoadKind};

use crate::error::StyleError;
use crate::expression::Expression;
use crate::matching::build_match;
use crate::ramp::{LegendEntry, build_step, ramp_legend};

/// Colour for anything a lookup doesn't know.
pub const FALLBACK_COLOR: &str = "black";

/// Light-to-dark ramp for detour scores.
pub const SCORE_COLOR_SCALE: [&str; 5] = ["#CDE594", "#80C6A3", "#1F9EB7", "#186290", "#080C54"];

/// Bucket boundaries for [`SCORE_COLOR_SCALE`].
pub const SCORE_LIMITS: [f64; 6] = [1.0, 4.0, 7.0, 10.0, 13.0, 15.0];

/// Property the engine writes detour scores to.
pub const SCORE_PROPERTY: &str = "score";

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Crossing => "green",
        Category::IndoorFootway => "grey",
        // TODO draw these dashed once the line layer supports per-feature dasharray
        Category::ElevatedOrUndergroundFootway => "black",
        Category::Footway | Category::Sidewalk => "black",
    }
}

/// Colour for an engine road kind. `WithTraffic` has no colour of its own.
pub fn road_kind_color(kind: RoadKind) -> Option<&'static str> {
    match kind {
        RoadKind::Footway | RoadKind::BridgeOrTunnel | RoadKind::Sidewalk => Some("black"),
        RoadKind::Indoors => Some("grey"),
        RoadKind::Crossing => Some("green"),
        RoadKind::Severance => Some("red"),
        RoadKind::WithTraffic => None,
    }
}

/// Line colour by classifier category.
pub fn category_color_expression() -> Result<Expression, StyleError> {
    build_match(
        &Expression::get(CATEGORY_PROPERTY),
        Category::ALL
            .into_iter()
            .map(|category| (category.as_str(), category_color(category))),
        FALLBACK_COLOR,
    )
}

/// Line colour by engine road kind, read from `attribute`.
pub fn road_kind_color_expression(attribute: &str) -> Result<Expression, StyleError> {
    build_match(
        &Expression::get(attribute),
        RoadKind::ALL
            .into_iter()
            .filter_map(|kind| road_kind_color(kind).map(|color| (kind.as_str(), color))),
        FALLBACK_COLOR,
    )
}

/// Colour ramp over a numeric score read from `attribute`.
pub fn score_color_expression(attribute: &str) -> Result<Expression, StyleError> {
    build_step(
        &Expression::get(attribute),
        &SCORE_LIMITS,
        &SCORE_COLOR_SCALE,
    )
}

pub fn score_legend() -> Result<Vec<LegendEntry<&'static str>>, StyleError> {
    ramp_legend(&SCORE_LIMITS, &SCORE_COLOR_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tables_are_valid() {
        assert!(category_color_expression().is_ok());
        assert!(road_kind_color_expression("kind").is_ok());
        assert!(score_color_expression(SCORE_PROPERTY).is_ok());
        assert_eq!(score_legend().unwrap().len(), SCORE_COLOR_SCALE.len());
    }

    #[test]
    fn with_traffic_falls_through() {
        let expression = road_kind_color_expression("kind").unwrap();
        let labels = expression.as_json().as_array().unwrap();
        assert!(!labels.contains(&serde_json::Value::from("WithTraffic")));
        assert_eq!(labels.last(), Some(&serde_json::Value::from(FALLBACK_COLOR)));
    }
}
