//! The application's state, created once per page.
//!
//! [`AppState`] replaces module-level stores: it is built at startup from the
//! address bar and handed by reference to whatever needs to read or write
//! state. Each field is a synced [`StateCell`] owning one query parameter.

use std::rc::Rc;

use serde::Serialize;
use snape_model::{Mode, Profile};
use tracing::{debug, warn};
use url::Url;

use crate::cell::StateCell;
use crate::error::ParseError;
use crate::location::SharedAddressBar;
use crate::options::AppOptions;
use crate::params::{
    ABOUT_PARAM, MAX_SCORE_PARAM, MIN_SCORE_PARAM, MODE_PARAM, PROFILE_PARAM, flag_param,
    mode_param, parse_flag, parse_mode, parse_profile, parse_score, profile_param, score_param,
};
use crate::url_state::url_state;

pub struct AppState {
    address_bar: SharedAddressBar,
    pub mode: StateCell<Mode>,
    pub profile: StateCell<Profile>,
    pub min_score: StateCell<u32>,
    pub max_score: StateCell<u32>,
    pub show_about: StateCell<bool>,
}

/// Plain copy of every cell's value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSnapshot {
    pub mode: Mode,
    pub profile: Profile,
    pub min_score: u32,
    pub max_score: u32,
    pub show_about: bool,
}

impl AppState {
    pub fn new(address_bar: &SharedAddressBar, options: &AppOptions) -> Self {
        let state = Self {
            address_bar: Rc::clone(address_bar),
            mode: url_state(address_bar, mode_param(options.mode)),
            profile: url_state(address_bar, profile_param(options.profile)),
            min_score: url_state(address_bar, score_param(MIN_SCORE_PARAM, options.min_score)),
            max_score: url_state(address_bar, score_param(MAX_SCORE_PARAM, options.max_score)),
            show_about: url_state(address_bar, flag_param(ABOUT_PARAM, options.show_about)),
        };
        state.reject_unplaceable_routes(options.mode);
        debug!(state = ?state.snapshot(), "restored application state");
        state
    }

    /// A route with a non-finite endpoint cannot be written to the URL, so the
    /// mode cell falls back instead of holding it.
    fn reject_unplaceable_routes(&self, fallback: Mode) {
        let fallback = if fallback.is_finite() { fallback } else { Mode::Title };
        let mode = self.mode.downgrade();
        self.mode.subscribe(move |current: &Mode| {
            if current.is_finite() {
                return;
            }
            if let Some(mode) = mode.upgrade() {
                warn!(?current, "route endpoints must be finite, leaving route mode");
                mode.set(fallback);
            }
        });
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            mode: self.mode.get(),
            profile: self.profile.get(),
            min_score: self.min_score.get(),
            max_score: self.max_score.get(),
            show_about: self.show_about.get(),
        }
    }

    /// The current shareable URL.
    pub fn href(&self) -> Url {
        self.address_bar.borrow().href().clone()
    }

    /// Sets one cell from its query-parameter text, as if the user had edited
    /// that parameter. Unlike start-up parsing, errors are returned.
    pub fn apply(&self, param: &str, raw: &str) -> Result<(), ParseError> {
        match param {
            MODE_PARAM => self.mode.set(parse_mode(raw)?),
            PROFILE_PARAM => self.profile.set(parse_profile(raw)?),
            MIN_SCORE_PARAM => self.min_score.set(parse_score(raw)?),
            MAX_SCORE_PARAM => self.max_score.set(parse_score(raw)?),
            ABOUT_PARAM => self.show_about.set(parse_flag(raw)?),
            other => return Err(ParseError::UnknownParam(other.to_string())),
        }
        Ok(())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("href", &self.href().as_str())
            .field("state", &self.snapshot())
            .finish()
    }
}
