#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! A small first-match URL router for single-page application views.
//!
//! `view-router` keeps an ordered table of routes, each mapping a path
//! pattern to an opaque view value. Patterns are made of literal segments
//! and named captures (`:name` matches exactly one segment). Resolving a URL
//! selects the first matching route in registration order, captures its path
//! parameters, decodes the query string, and derives the props handed to the
//! view.
//!
//! ```rust
//! use view_router::{props, Route, Router};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! #[derive(Debug, PartialEq)]
//! enum View {
//!     Search,
//!     Package,
//! }
//!
//! let mut router = Router::new();
//! router.insert(Route::new("/", "main", View::Search))?;
//! router.insert(
//!     Route::new("/package/:name", "package", View::Package).with_props(props::spread),
//! )?;
//!
//! let resolved = router.resolve("/package/libfoo?version=2")?;
//! assert_eq!(*resolved.view(), View::Package);
//! assert_eq!(resolved.params().get("name"), Some("libfoo"));
//!
//! // `props::spread` inserts query pairs first, then path captures,
//! // so a capture wins over a query key of the same name.
//! let props = resolved.props();
//! assert_eq!(props.get("version"), Some("2"));
//! assert_eq!(props.get("name"), Some("libfoo"));
//!
//! // Named navigation goes the other way.
//! let url = router.url_for("package", &[("name", "libfoo")], &[("version", "2")])?;
//! assert_eq!(url, "/package/libfoo?version=2");
//! # Ok(())
//! # }
//! ```

mod error;
mod params;
mod pattern;
pub mod props;
mod query;
mod router;

pub use error::{InsertError, MatchError, UrlError};
pub use params::{Params, ParamsIter};
pub use props::Props;
pub use query::{Query, QueryIter};
pub use router::{Match, MatchedRoute, Resolved, Route, Router};
