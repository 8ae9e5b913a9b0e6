//! Props derivation for rendered views.

use std::collections::BTreeMap;
use std::fmt;

use crate::router::MatchedRoute;

/// The key/value mapping handed to a view when its route is rendered.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Props {
    inner: BTreeMap<String, String>,
}

impl Props {
    /// Returns an empty map.
    pub fn new() -> Props {
        Props::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the value registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.inner.get(key.as_ref()).map(String::as_str)
    }

    /// Inserts a key/value pair, returning the value it replaced, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    /// Returns an iterator over the entries, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Props {
        Props {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Spreads the query pairs and then the path captures into one map.
///
/// Captures are inserted after the query, so on a key collision the capture
/// value wins: resolving `/package/libfoo?name=ignored` against
/// `/package/:name` derives `name = libfoo`. This is the usual derivation
/// for routes that forward their whole navigation state to the view.
///
/// ```rust
/// use view_router::{props, Route, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert(Route::new("/package/:name", "package", ()).with_props(props::spread))?;
///
/// let props = router.resolve("/package/libfoo?version=2")?.props();
/// assert_eq!(props.get("name"), Some("libfoo"));
/// assert_eq!(props.get("version"), Some("2"));
/// # Ok(())
/// # }
/// ```
pub fn spread(matched: &MatchedRoute<'_, '_>) -> Props {
    let mut props = Props::new();
    for (key, value) in matched.query().iter() {
        props.insert(key, value);
    }
    for (key, value) in matched.params().iter() {
        props.insert(key, value);
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces() {
        let mut props = Props::new();
        assert_eq!(props.insert("name", "libfoo"), None);
        assert_eq!(props.insert("name", "libbar"), Some("libfoo".to_owned()));
        assert_eq!(props.get("name"), Some("libbar"));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let props: Props = [("a", "1"), ("b", "2")].into_iter().collect();
        assert!(props.iter().eq([("a", "1"), ("b", "2")]));
    }
}
