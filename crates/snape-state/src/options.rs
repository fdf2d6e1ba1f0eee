//! Defaults for the application's synced state.

use serde::{Deserialize, Serialize};
use snape_model::{Mode, Profile};

use crate::params::SCORE_RANGE;

/// Values a fresh page starts with. A cell holding its default leaves its
/// parameter out of the URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppOptions {
    pub mode: Mode,
    pub profile: Profile,
    pub min_score: u32,
    pub max_score: u32,
    /// Show the about panel on first load.
    pub show_about: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Title,
            profile: Profile::USA,
            min_score: SCORE_RANGE.0,
            max_score: SCORE_RANGE.1,
            show_about: true,
        }
    }
}

impl AppOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Default score filter, clamped to the percentage range.
    #[must_use]
    pub fn with_score_range(mut self, min: u32, max: u32) -> Self {
        let (low, high) = SCORE_RANGE;
        self.min_score = min.clamp(low, high);
        self.max_score = max.clamp(self.min_score, high);
        self
    }

    #[must_use]
    pub fn with_show_about(mut self, show: bool) -> Self {
        self.show_about = show;
        self
    }
}
