//! The address bar seam.
//!
//! In the browser this is `window.location` plus `history.replaceState`. The
//! state layer only ever needs to read the current URL and replace it in
//! place, so that is all [`AddressBar`] asks for.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;
use url::Url;

use crate::error::LocationError;

pub trait AddressBar {
    /// The current location.
    fn href(&self) -> &Url;

    /// Swaps the current history entry for `url`. Must not navigate or add
    /// a history entry.
    fn replace_state(&mut self, url: Url);
}

/// The address bar shared by every synced cell of one page.
pub type SharedAddressBar = Rc<RefCell<dyn AddressBar>>;

/// In-process address bar for tooling and tests.
#[derive(Debug, Clone)]
pub struct MemoryAddressBar {
    url: Url,
    history_len: usize,
    replacements: usize,
}

impl MemoryAddressBar {
    pub fn new(href: &str) -> Result<Self, LocationError> {
        let url = Url::parse(href).map_err(|source| LocationError {
            href: href.to_string(),
            source,
        })?;
        Ok(Self {
            url,
            history_len: 1,
            replacements: 0,
        })
    }

    pub fn into_shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// Navigates to `url` with a new history entry, the way following a link
    /// would. Synced cells never do this.
    pub fn push_state(&mut self, url: Url) {
        trace!(from = %self.url, to = %url, "push history entry");
        self.url = url;
        self.history_len += 1;
    }

    /// Number of entries in the session history.
    pub fn history_len(&self) -> usize {
        self.history_len
    }

    /// Number of times [`AddressBar::replace_state`] was called.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    pub fn param(&self, name: &str) -> Option<String> {
        query_param(&self.url, name)
    }
}

impl AddressBar for MemoryAddressBar {
    fn href(&self) -> &Url {
        &self.url
    }

    fn replace_state(&mut self, url: Url) {
        trace!(from = %self.url, to = %url, "replace history entry");
        self.url = url;
        self.replacements += 1;
    }
}

/// First value of `name` in the query string, decoded.
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Returns `url` with only the `name` parameter changed.
///
/// `Some` behaves like `URLSearchParams.set`: the first occurrence keeps its
/// position and takes the new value, later duplicates are dropped, and a
/// missing key is appended. `None` removes every occurrence. All other
/// parameters keep their order and values, and the fragment is untouched.
pub fn with_query_param(url: &Url, name: &str, value: Option<&str>) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut placed = false;
    for (key, existing) in url.query_pairs() {
        if key != name {
            pairs.push((key.into_owned(), existing.into_owned()));
            continue;
        }
        if let Some(value) = value
            && !placed
        {
            pairs.push((key.into_owned(), value.to_string()));
            placed = true;
        }
    }
    if let Some(value) = value
        && !placed
    {
        pairs.push((name.to_string(), value.to_string()));
    }

    let mut next = url.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(pairs);
    }
    next
}
