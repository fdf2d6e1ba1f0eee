//! The work behind each subcommand, kept free of terminal I/O.

use anyhow::{Context, Result, anyhow, bail};
use snape_model::{CategoryCounts, FeatureCollection, classify_all};
use snape_state::{AppOptions, AppSnapshot, AppState, MemoryAddressBar, SharedAddressBar};
use snape_style::palette::{
    SCORE_PROPERTY, category_color_expression, road_kind_color_expression,
    score_color_expression,
};
use snape_style::Expression;
use tracing::{debug, info};

/// Default property holding the engine's road kind.
pub const ROAD_KIND_PROPERTY: &str = "kind";

#[derive(Debug)]
pub struct ClassifyOutput {
    pub geojson: String,
    pub counts: CategoryCounts,
}

/// Classifies every feature of a GeoJSON `FeatureCollection`.
pub fn classify_geojson(text: &str, pretty: bool) -> Result<ClassifyOutput> {
    let mut collection = FeatureCollection::from_json(text).context("read features")?;
    let counts = classify_all(&mut collection);
    info!(features = counts.total(), "classified features");
    let geojson = if pretty {
        serde_json::to_string_pretty(&collection)
    } else {
        serde_json::to_string(&collection)
    }
    .context("serialize features")?;
    Ok(ClassifyOutput { geojson, counts })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKind {
    /// Classifier categories, read from the `type` property.
    Categories,
    /// Engine road kinds.
    RoadKinds,
    /// Detour score ramp.
    Scores,
}

/// Builds one of the map's paint expressions. `attribute` overrides the
/// property read for road kinds and scores.
pub fn style_expression(kind: StyleKind, attribute: Option<&str>) -> Result<Expression> {
    let expression = match kind {
        StyleKind::Categories => {
            if attribute.is_some() {
                bail!("category colours always read the classifier's property");
            }
            category_color_expression()
        }
        StyleKind::RoadKinds => {
            road_kind_color_expression(attribute.unwrap_or(ROAD_KIND_PROPERTY))
        }
        StyleKind::Scores => score_color_expression(attribute.unwrap_or(SCORE_PROPERTY)),
    };
    expression.context("build style expression")
}

#[derive(Debug, Clone)]
pub struct LinkResult {
    pub snapshot: AppSnapshot,
    pub href: String,
    pub replacements: usize,
}

/// Splits a `KEY=VALUE` assignment.
pub fn parse_assignment(text: &str) -> Result<(String, String)> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got {text:?}"))?;
    if key.is_empty() {
        bail!("empty parameter name in {text:?}");
    }
    Ok((key.to_string(), value.to_string()))
}

/// Restores application state from `href`, applies `assignments` in order
/// and returns the resulting state and canonical URL.
pub fn resolve_link(href: &str, assignments: &[(String, String)]) -> Result<LinkResult> {
    let concrete = MemoryAddressBar::new(href)?.into_shared();
    let shared: SharedAddressBar = concrete.clone();
    let state = AppState::new(&shared, &AppOptions::default());
    for (key, value) in assignments {
        state
            .apply(key, value)
            .with_context(|| format!("set {key}={value}"))?;
        debug!(%key, %value, "applied assignment");
    }
    let replacements = concrete.borrow().replacements();
    Ok(LinkResult {
        snapshot: state.snapshot(),
        href: state.href().to_string(),
        replacements,
    })
}
