//! Request matchers over HTTP request heads.
//!
//! | Matcher | Description |
//! |---------|-------------|
//! | [`Method`] | Match by HTTP method |
//! | [`Path`] | Match by URL path pattern |
//! | [`Host`] | Match by host name |
//! | [`Header`] | Match by request header |
//!
//! Matchers compose with [`MatcherExt`](cachecontrol_core::MatcherExt):
//!
//! ```
//! use cachecontrol_core::{MatcherExt, RequestMatcher};
//! use cachecontrol_http::matchers::{Header, Method, Operation, Path};
//!
//! // GET requests under /api that do not carry an Authorization header
//! let matcher = Method::new(http::Method::GET)
//!     .and(Path::new("/api/{tail}*"))
//!     .and(Header::new(Operation::Exist(http::header::AUTHORIZATION)).not());
//!
//! let (parts, ()) = http::Request::get("/api/items").body(()).unwrap().into_parts();
//! assert!(matcher.matches(&parts));
//! ```

pub mod header;
pub mod host;
pub mod method;
pub mod path;

pub use header::{Header, Operation};
pub use host::Host;
pub use method::Method;
pub use path::{InvalidPathPattern, Path};
