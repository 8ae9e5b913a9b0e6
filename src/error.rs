use std::fmt;

/// Represents errors that can occur when registering a new route.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum InsertError {
    /// Attempted to register a pattern that matches the same paths as an
    /// existing route.
    Conflict {
        /// The existing route that the registration is conflicting with.
        with: String,
    },
    /// Attempted to reuse the name of an existing route.
    DuplicateName {
        /// The name already taken.
        name: String,
    },
    /// Capture segments must be registered with a name.
    UnnamedParam,
    /// Patterns must begin with a `/`.
    MissingLeadingSlash,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict { with } => {
                write!(
                    f,
                    "registration failed due to conflict with previously registered route: {}",
                    with
                )
            }
            Self::DuplicateName { name } => {
                write!(f, "a route named '{}' is already registered", name)
            }
            Self::UnnamedParam => write!(f, "capture segments must be registered with a name"),
            Self::MissingLeadingSlash => write!(f, "patterns must begin with '/'"),
        }
    }
}

impl std::error::Error for InsertError {}

/// A failed match attempt.
///
/// ```
/// use view_router::{MatchError, Route, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.insert(Route::new("/", "main", "Welcome!"))?;
/// router.insert(Route::new("/package/:name", "package", "A package."))?;
///
/// // no routes match
/// if let Err(err) = router.resolve("/foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchError {
    /// No matching route was found.
    NotFound,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matching route not found")
    }
}

impl std::error::Error for MatchError {}

/// Represents errors that can occur when building a URL for a named route.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum UrlError {
    /// No route is registered under the given name.
    RouteNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// The route's pattern has a capture with no value supplied for it.
    MissingParam {
        /// The name of the capture left without a value.
        name: String,
    },
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RouteNotFound { name } => write!(f, "no route named '{}'", name),
            Self::MissingParam { name } => {
                write!(f, "no value supplied for capture ':{}'", name)
            }
        }
    }
}

impl std::error::Error for UrlError {}
