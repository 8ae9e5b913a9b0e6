//! The route table: an ordered sequence of route definitions consumed by a
//! host navigation mechanism.
//!
//! The table is built once at application start and never mutated afterwards,
//! so resolution is a pure function of the input URL and any number of
//! concurrent lookups can share the table without locking.

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::error::{InsertError, MatchError, UrlError};
use crate::params::Params;
use crate::pattern::Pattern;
use crate::props::Props;
use crate::query::Query;

/// The props derivation attached to a route: receives the matched navigation
/// state and returns the map handed to the view.
pub type PropsFn = Box<dyn Fn(&MatchedRoute<'_, '_>) -> Props + Send + Sync>;

/// A single route definition: a path pattern, a unique name, the view value
/// rendered on a match, and an optional props derivation.
///
/// The pattern is validated when the route is registered, not when it is
/// built, so definitions can be declared as plain data.
pub struct Route<T> {
    path: String,
    name: String,
    view: T,
    props: Option<PropsFn>,
}

impl<T> Route<T> {
    /// Creates a route definition mapping `path` to `view` under `name`.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: T) -> Route<T> {
        Route {
            path: path.into(),
            name: name.into(),
            view,
            props: None,
        }
    }

    /// Attaches a props derivation, called on every resolution of this route.
    ///
    /// Routes without one derive an empty map. See [`props::spread`] for the
    /// usual derivation.
    ///
    /// [`props::spread`]: crate::props::spread
    pub fn with_props<F>(mut self, f: F) -> Route<T>
    where
        F: Fn(&MatchedRoute<'_, '_>) -> Props + Send + Sync + 'static,
    {
        self.props = Some(Box::new(f));
        self
    }

    /// The pattern this route was declared with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The route's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view value rendered when this route matches.
    pub fn view(&self) -> &T {
        &self.view
    }
}

impl<T: fmt::Debug> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

struct Entry<T> {
    route: Route<T>,
    pattern: Pattern,
}

/// A first-match URL router mapping path patterns to view values.
///
/// Routes are tested in registration order and the first structural match
/// wins. See the [crate documentation](crate) for a full example.
pub struct Router<T> {
    base: String,
    entries: Vec<Entry<T>>,
    names: HashMap<String, usize>,
}

impl<T> Router<T> {
    /// Constructs a new router with no base prefix.
    pub fn new() -> Router<T> {
        Router::with_base("")
    }

    /// Constructs a new router whose routes all live under `base`.
    ///
    /// The base is stripped from URLs before matching and prepended by
    /// [`url_for`](Router::url_for); URLs outside it never match. Trailing
    /// slashes on the base are ignored.
    pub fn with_base(base: impl Into<String>) -> Router<T> {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }

        Router {
            base,
            entries: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// The configured base prefix, without any trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Registers a single route definition.
    pub fn insert(&mut self, route: Route<T>) -> Result<(), InsertError> {
        let pattern = Pattern::parse(&route.path)?;

        if let Some(existing) = self.entries.iter().find(|e| e.pattern.overlaps(&pattern)) {
            return Err(InsertError::Conflict {
                with: existing.pattern.as_str().to_owned(),
            });
        }

        if self.names.contains_key(&route.name) {
            return Err(InsertError::DuplicateName {
                name: route.name.clone(),
            });
        }

        debug!("registered route {} as '{}'", route.path, route.name);
        self.names.insert(route.name.clone(), self.entries.len());
        self.entries.push(Entry { route, pattern });
        Ok(())
    }

    /// Registers an ordered sequence of route definitions.
    ///
    /// Stops at the first failing definition; routes registered before it
    /// stay in the table.
    pub fn register(
        &mut self,
        routes: impl IntoIterator<Item = Route<T>>,
    ) -> Result<(), InsertError> {
        for route in routes {
            self.insert(route)?;
        }
        Ok(())
    }

    /// Matches a bare path against the table, without base stripping or
    /// query handling. This is the primitive [`resolve`](Router::resolve)
    /// builds on.
    pub fn at<'r, 'p>(&'r self, path: &'p str) -> Result<Match<'r, 'p, T>, MatchError> {
        for entry in &self.entries {
            if let Some(params) = entry.pattern.matches(path) {
                return Ok(Match {
                    value: &entry.route.view,
                    params,
                });
            }
        }
        Err(MatchError::NotFound)
    }

    /// Resolves a full URL: splits off the fragment and query string, strips
    /// the base prefix, and returns the first matching route together with
    /// its captures and the decoded query pairs.
    pub fn resolve<'r, 'p>(&'r self, url: &'p str) -> Result<Resolved<'r, 'p, T>, MatchError> {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        let (path, raw_query) = match url.split_once('?') {
            Some((path, query)) => (path, query),
            None => (url, ""),
        };

        let path = self.strip_base(path).ok_or(MatchError::NotFound)?;

        for entry in &self.entries {
            if let Some(params) = entry.pattern.matches(path) {
                trace!("{} matched {}", path, entry.route.path);
                return Ok(Resolved {
                    route: &entry.route,
                    matched: MatchedRoute {
                        params,
                        query: Query::parse(raw_query),
                    },
                });
            }
        }

        trace!("{} matched no route", path);
        Err(MatchError::NotFound)
    }

    /// Returns the route registered under the given name.
    pub fn route(&self, name: impl AsRef<str>) -> Option<&Route<T>> {
        self.names
            .get(name.as_ref())
            .map(|&index| &self.entries[index].route)
    }

    /// Builds the URL for a named route from its params and query pairs.
    ///
    /// Capture values are percent-encoded into their path segments and the
    /// query pairs are form-urlencoded; the base prefix is prepended.
    pub fn url_for(
        &self,
        name: &str,
        params: &[(&str, &str)],
        query: &[(&str, &str)],
    ) -> Result<String, UrlError> {
        let index = self
            .names
            .get(name)
            .ok_or_else(|| UrlError::RouteNotFound {
                name: name.to_owned(),
            })?;

        let path = self.entries[*index].pattern.render(params)?;

        let mut url = String::with_capacity(self.base.len() + path.len());
        url.push_str(&self.base);
        url.push_str(&path);

        if !query.is_empty() {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query)
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }

        Ok(url)
    }

    fn strip_base<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.base.is_empty() {
            return Some(path);
        }

        match path.strip_prefix(self.base.as_str()) {
            // a bare "/base" URL addresses the root route
            Some("") => Some("/"),
            Some(rest) if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Router::new()
    }
}

/// A successful path match: the view registered for the route and the
/// captured parameters.
#[derive(Debug)]
pub struct Match<'r, 'p, T> {
    /// The view value registered for the matched route.
    pub value: &'r T,
    /// The captured path parameters.
    pub params: Params<'r, 'p>,
}

/// The transient navigation state produced by one resolution: path captures
/// plus decoded query pairs. Handed to the route's props derivation and
/// discarded once the view is rendered.
#[derive(Debug)]
pub struct MatchedRoute<'r, 'p> {
    params: Params<'r, 'p>,
    query: Query<'p>,
}

impl<'r, 'p> MatchedRoute<'r, 'p> {
    /// The captured path parameters.
    pub fn params(&self) -> &Params<'r, 'p> {
        &self.params
    }

    /// The decoded query pairs.
    pub fn query(&self) -> &Query<'p> {
        &self.query
    }
}

/// A resolved navigation: the selected route and its matched state.
#[derive(Debug)]
pub struct Resolved<'r, 'p, T> {
    route: &'r Route<T>,
    matched: MatchedRoute<'r, 'p>,
}

impl<'r, 'p, T> Resolved<'r, 'p, T> {
    /// The route that matched.
    pub fn route(&self) -> &'r Route<T> {
        self.route
    }

    /// The view value registered for the matched route.
    pub fn view(&self) -> &'r T {
        &self.route.view
    }

    /// The matched route's name.
    pub fn name(&self) -> &'r str {
        &self.route.name
    }

    /// The captured path parameters.
    pub fn params(&self) -> &Params<'r, 'p> {
        &self.matched.params
    }

    /// The decoded query pairs.
    pub fn query(&self) -> &Query<'p> {
        &self.matched.query
    }

    /// The full matched navigation state.
    pub fn matched(&self) -> &MatchedRoute<'r, 'p> {
        &self.matched
    }

    /// Derives the props for the view.
    ///
    /// Calls the route's props derivation, or returns an empty map when the
    /// route attaches none.
    pub fn props(&self) -> Props {
        match &self.route.props {
            Some(derive) => derive(&self.matched),
            None => Props::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_trailing_slashes_are_ignored() {
        let router: Router<()> = Router::with_base("/packages/");
        assert_eq!(router.base(), "/packages");
    }

    #[test]
    fn bare_base_addresses_the_root_route() {
        let mut router = Router::with_base("/packages");
        router.insert(Route::new("/", "main", ())).unwrap();

        assert!(router.resolve("/packages").is_ok());
        assert!(router.resolve("/packages/").is_ok());
        assert!(matches!(
            router.resolve("/packagesx"),
            Err(MatchError::NotFound)
        ));
    }

    #[test]
    fn named_lookup() {
        let mut router = Router::new();
        router.insert(Route::new("/", "main", 1)).unwrap();
        router
            .insert(Route::new("/package/:name", "package", 2))
            .unwrap();

        assert_eq!(router.route("package").map(Route::view), Some(&2));
        assert!(router.route("missing").is_none());
    }
}
