use std::borrow::Cow;
use std::{fmt, slice};

/// Decoded key/value pairs from a URL query string.
///
/// Pairs keep their order of appearance and repeated keys are preserved;
/// [`get`](Query::get) returns the first value registered under a key.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Query<'q> {
    pairs: Vec<(Cow<'q, str>, Cow<'q, str>)>,
}

impl<'q> Query<'q> {
    /// Parses a raw query string (without the leading `?`) with
    /// form-urlencoded rules, so `+` decodes to a space.
    pub(crate) fn parse(raw: &'q str) -> Query<'q> {
        Query {
            pairs: form_urlencoded::parse(raw.as_bytes()).collect(),
        }
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the query string held no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the first value registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns an iterator over the pairs, in order of appearance.
    pub fn iter(&self) -> QueryIter<'_, 'q> {
        QueryIter {
            inner: self.pairs.iter(),
        }
    }
}

impl fmt::Debug for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// An iterator over the keys and values of a URL's [query pairs](crate::Query).
pub struct QueryIter<'qs, 'q> {
    inner: slice::Iter<'qs, (Cow<'q, str>, Cow<'q, str>)>,
}

impl<'qs> Iterator for QueryIter<'qs, '_> {
    type Item = (&'qs str, &'qs str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }
}

impl ExactSizeIterator for QueryIter<'_, '_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}
