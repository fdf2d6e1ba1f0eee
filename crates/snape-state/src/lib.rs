//! Client-side application state for the walkability map.
//!
//! State lives in [`StateCell`]s. Cells created through [`url_state`] mirror
//! their value into one query parameter of the address bar, so a view can be
//! bookmarked, shared and reloaded. [`AppState`] bundles the cells the map
//! UI needs.

pub mod app;
pub mod cell;
pub mod error;
pub mod location;
pub mod options;
pub mod params;
pub mod url_state;

pub use app::{AppSnapshot, AppState};
pub use cell::{StateCell, SubscriptionId, WeakStateCell};
pub use error::{LocationError, ParseError};
pub use location::{AddressBar, MemoryAddressBar, SharedAddressBar, query_param, with_query_param};
pub use options::AppOptions;
pub use url_state::{UrlParam, url_state};
