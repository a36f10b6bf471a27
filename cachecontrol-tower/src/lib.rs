//! Tower middleware for rule-driven cache-control annotation.
//!
//! [`CacheControlLayer`] wraps any Tower service handling
//! `http::Request`s. For each request it picks the first matching rule of a
//! shared [`HttpRuleSet`], forwards the request unchanged, and annotates the
//! response once it is ready:
//!
//! - the rule's cache-control directives,
//! - the `X-Varnish-TTL` header if the rule sets one,
//! - `Cookie` in `Vary`, for every response.
//!
//! # Quick Start
//!
//! ```
//! use std::convert::Infallible;
//!
//! use cachecontrol_core::{CacheControls, CacheOptions};
//! use cachecontrol_http::{HttpRuleSet, matchers::Path};
//! use cachecontrol_tower::CacheControlLayer;
//! use tower::ServiceBuilder;
//!
//! let rules = HttpRuleSet::builder()
//!     .add(
//!         Path::new("/api/{tail}*"),
//!         CacheOptions::new()
//!             .controls(CacheControls::new().public(true).max_age(60))
//!             .varnish_ttl(120),
//!     )
//!     .add_any(CacheOptions::new().controls(CacheControls::new().private(true)))
//!     .build();
//!
//! let service = ServiceBuilder::new()
//!     .layer(CacheControlLayer::new(rules))
//!     .service(tower::service_fn(|_req: http::Request<()>| async {
//!         Ok::<_, Infallible>(http::Response::new("Hello"))
//!     }));
//! # let _ = service;
//! ```
//!
//! # Errors
//!
//! The service error is [`Error`]: either the inner service failed, or the
//! matched rule could not be applied (for instance an unparseable
//! `last_modified` date). Annotation failures only affect requests matching
//! the faulty rule.
//!
//! [`HttpRuleSet`]: cachecontrol_http::HttpRuleSet

#![warn(missing_docs)]

/// Service error type.
pub mod error;
/// Response future of the service.
pub mod future;
/// Tower layer.
pub mod layer;
/// The Tower service performing the annotation.
pub mod service;

pub use error::Error;
pub use future::CacheControlFuture;
pub use layer::CacheControlLayer;
pub use service::CacheControlService;
