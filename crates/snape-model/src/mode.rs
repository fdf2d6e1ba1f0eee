//! What the map is currently showing.

use serde::{Deserialize, Serialize};

/// A `(longitude, latitude)` pair in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

/// Bounds of the loaded study area, as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: LonLat,
    pub max: LonLat,
}

impl BoundingBox {
    /// Accepts the engine's flat `[x1, y1, x2, y2]` form.
    pub fn from_array(bounds: [f64; 4]) -> Self {
        Self {
            min: LonLat::new(bounds[0], bounds[1]),
            max: LonLat::new(bounds[2], bounds[3]),
        }
    }

    /// The point `pct` of the way from `min` to `max` along both axes.
    pub fn interpolate(&self, pct: f64) -> LonLat {
        LonLat::new(
            lerp(pct, self.min.lon, self.max.lon),
            lerp(pct, self.min.lat, self.max.lat),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Title,
    Score,
    Route {
        #[serde(rename = "route_a")]
        from: LonLat,
        #[serde(rename = "route_b")]
        to: LonLat,
    },
    Debug,
}

impl Mode {
    /// A route mode with both endpoints near the middle of `bounds`, so the
    /// first route drawn is visible without panning.
    pub fn route_within(bounds: &BoundingBox) -> Self {
        Mode::Route {
            from: bounds.interpolate(0.4),
            to: bounds.interpolate(0.6),
        }
    }

    /// False for a route with a NaN or infinite endpoint.
    pub fn is_finite(&self) -> bool {
        match self {
            Mode::Route { from, to } => from.is_finite() && to.is_finite(),
            _ => true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Title => "title",
            Mode::Score => "score",
            Mode::Route { .. } => "route",
            Mode::Debug => "debug",
        }
    }
}

fn lerp(pct: f64, a: f64, b: f64) -> f64 {
    a + pct * (b - a)
}
