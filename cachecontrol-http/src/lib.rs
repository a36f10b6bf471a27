//! HTTP integration for cachecontrol.
//!
//! - [`matchers`]: request matchers over [`http::request::Parts`].
//! - [`ResponseHeaders`]: the [`CacheHeaders`] implementation on top of an
//!   [`http::HeaderMap`], reachable from responses through [`ResponseExt`].
//!
//! ```
//! use cachecontrol_core::{CacheControls, CacheOptions};
//! use cachecontrol_http::{HttpRuleSet, ResponseExt, matchers::Path};
//!
//! let rules = HttpRuleSet::builder()
//!     .add(
//!         Path::new("/api/{tail}*"),
//!         CacheOptions::new()
//!             .controls(CacheControls::new().public(true).max_age(60))
//!             .varnish_ttl(120),
//!     )
//!     .build();
//!
//! let (parts, ()) = http::Request::get("/api/items").body(()).unwrap().into_parts();
//! let mut response = http::Response::new(());
//! rules.annotate(&parts, &mut response.cache_headers()).unwrap();
//!
//! assert_eq!(response.headers()["cache-control"], "public, max-age=60");
//! assert_eq!(response.headers()["x-varnish-ttl"], "120");
//! assert_eq!(response.headers()["vary"], "Cookie");
//! ```
//!
//! [`CacheHeaders`]: cachecontrol_core::CacheHeaders

pub mod cache_control;
pub mod matchers;
mod response;

pub use cache_control::CacheControlValue;
pub use response::{ResponseExt, ResponseHeaders};

/// Rule over HTTP request heads.
pub type HttpRule = cachecontrol_core::Rule<http::request::Parts>;

/// Rule set over HTTP request heads.
pub type HttpRuleSet = cachecontrol_core::RuleSet<http::request::Parts>;

/// Boxed matcher over HTTP request heads.
pub type HttpMatcher = cachecontrol_core::BoxMatcher<http::request::Parts>;
