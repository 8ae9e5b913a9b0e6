use std::borrow::Cow;
use std::{fmt, slice};

/// A single path capture, consisting of a key and a value.
///
/// Keys borrow from the route table, values from the matched URL. A value is
/// owned only when percent-decoding actually changed it.
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone)]
struct Param<'k, 'v> {
    key: &'k str,
    value: Cow<'v, str>,
}

/// The list of path captures produced by a route match.
///
/// ```rust
/// # use view_router::{Route, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = Router::new();
/// # router.insert(Route::new("/package/:name", "package", true))?;
/// let resolved = router.resolve("/package/libfoo")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in resolved.params().iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// let name = resolved.params().get("name");
/// assert_eq!(name, Some("libfoo"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone, Default)]
pub struct Params<'k, 'v> {
    inner: Vec<Param<'k, 'v>>,
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Returns the number of captures.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no captures in the list.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the value of the first capture registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.inner
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value.as_ref())
    }

    /// Returns an iterator over the captures in the list, in pattern order.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter {
            inner: self.inner.iter(),
        }
    }

    /// Inserts a key value pair into the list.
    pub(crate) fn push(&mut self, key: &'k str, value: Cow<'v, str>) {
        self.inner.push(Param { key, value });
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    inner: slice::Iter<'ps, Param<'k, 'v>>,
}

impl<'ps, 'k, 'v> Iterator for ParamsIter<'ps, 'k, 'v> {
    type Item = (&'k str, &'ps str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|p| (p.key, p.value.as_ref()))
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
