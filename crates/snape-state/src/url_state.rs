//! Cells whose value lives in a query parameter.
//!
//! [`url_state`] reads the initial value from the address bar once, then keeps
//! the parameter in step with every value the cell takes. A parameter that is
//! missing means "default"; a parameter that fails to parse is logged and
//! treated the same way, and the next write rewrites or removes it.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};
use url::Url;

use crate::cell::StateCell;
use crate::error::ParseError;
use crate::location::{SharedAddressBar, query_param, with_query_param};

type Stringify<T> = Rc<dyn Fn(&T) -> Option<String>>;
type Parse<T> = Rc<dyn Fn(&str) -> Result<T, ParseError>>;

/// How one value maps to and from one query parameter.
pub struct UrlParam<T> {
    name: String,
    default: T,
    stringify: Stringify<T>,
    parse: Parse<T>,
}

impl<T> Clone for UrlParam<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            default: self.default.clone(),
            stringify: Rc::clone(&self.stringify),
            parse: Rc::clone(&self.parse),
        }
    }
}

impl<T: Clone + 'static> UrlParam<T> {
    /// `stringify` returns `None` for values that should leave the URL clean,
    /// normally just the default.
    pub fn new(
        name: impl Into<String>,
        default: T,
        stringify: impl Fn(&T) -> Option<String> + 'static,
        parse: impl Fn(&str) -> Result<T, ParseError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            default,
            stringify: Rc::new(stringify),
            parse: Rc::new(parse),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    pub fn stringify(&self, value: &T) -> Option<String> {
        (self.stringify)(value)
    }

    pub fn parse(&self, raw: &str) -> Result<T, ParseError> {
        (self.parse)(raw)
    }

    /// The value encoded in `url`, or the default if the parameter is missing
    /// or malformed.
    pub fn initial_value(&self, url: &Url) -> T {
        let Some(raw) = query_param(url, &self.name) else {
            return self.default.clone();
        };
        match self.parse(&raw) {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    param = %self.name,
                    value = %raw,
                    %error,
                    "parsing URL parameter failed, using default value"
                );
                self.default.clone()
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UrlParam<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlParam")
            .field("name", &self.name)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// Creates a cell initialised from, and synced back to, `param` in the
/// address bar.
///
/// Every value the cell takes, starting with the initial one, is written with
/// [`AddressBar::replace_state`](crate::AddressBar::replace_state). Only this
/// parameter is touched; siblings written by other cells are preserved.
pub fn url_state<T: Clone + 'static>(
    address_bar: &SharedAddressBar,
    param: UrlParam<T>,
) -> StateCell<T> {
    let initial = param.initial_value(address_bar.borrow().href());
    let cell = StateCell::new(initial);

    let address_bar = Rc::clone(address_bar);
    cell.subscribe(move |value: &T| {
        let encoded = param.stringify(value);
        let current = address_bar.borrow().href().clone();
        let next = with_query_param(&current, &param.name, encoded.as_deref());
        debug!(param = %param.name, value = ?encoded, "sync URL parameter");
        address_bar.borrow_mut().replace_state(next);
    });
    cell
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::location::{AddressBar, MemoryAddressBar};

    fn counter(name: &str) -> UrlParam<u32> {
        UrlParam::new(
            name,
            0,
            |value: &u32| (*value != 0).then(|| value.to_string()),
            |raw: &str| Ok(raw.parse::<u32>()?),
        )
    }

    fn bar(href: &str) -> (Rc<RefCell<MemoryAddressBar>>, SharedAddressBar) {
        let concrete = MemoryAddressBar::new(href).unwrap().into_shared();
        let shared: SharedAddressBar = concrete.clone();
        (concrete, shared)
    }

    #[test]
    fn reads_initial_value_from_query() {
        let (_, shared) = bar("https://example.org/?n=7");
        let cell = url_state(&shared, counter("n"));
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn missing_param_uses_default_and_stays_missing() {
        let (concrete, shared) = bar("https://example.org/?other=x");
        let cell = url_state(&shared, counter("n"));
        assert_eq!(cell.get(), 0);
        assert_eq!(concrete.borrow().href().as_str(), "https://example.org/?other=x");
    }

    #[test]
    fn malformed_param_falls_back_and_is_cleaned_up() {
        let (concrete, shared) = bar("https://example.org/?n=seven&other=x");
        let cell = url_state(&shared, counter("n"));
        assert_eq!(cell.get(), 0);
        assert_eq!(concrete.borrow().param("n"), None);
        assert_eq!(concrete.borrow().param("other").as_deref(), Some("x"));
    }

    #[test]
    fn writes_follow_every_set() {
        let (concrete, shared) = bar("https://example.org/start");
        concrete
            .borrow_mut()
            .push_state(Url::parse("https://example.org/").unwrap());
        let cell = url_state(&shared, counter("n"));
        cell.set(3);
        assert_eq!(concrete.borrow().href().as_str(), "https://example.org/?n=3");
        cell.set(0);
        assert_eq!(concrete.borrow().href().as_str(), "https://example.org/");
        assert_eq!(concrete.borrow().history_len(), 2);
        assert_eq!(concrete.borrow().replacements(), 3);
    }
}
