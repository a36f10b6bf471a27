#![warn(missing_docs)]
//! # cachecontrol-core
//!
//! Core traits and types for rule-driven cache-control annotation.
//!
//! This crate is **protocol-agnostic**: it knows how to pick the first
//! matching rule for a request and what to do with the response once a rule
//! is chosen, but it leaves request inspection and header storage to
//! protocol-specific crates such as `cachecontrol-http`.
//!
//! ## Architecture
//!
//! - [`RequestMatcher`] decides whether a rule applies to a request.
//! - [`CacheOptions`] holds the typed [`CacheControls`] and the optional
//!   reverse-proxy TTL of a rule.
//! - [`RuleSet`] is the ordered, immutable list of rules. The first matching
//!   rule wins.
//! - [`CacheHeaders`] is the response surface the annotation writes to.
//!
//! ## Annotation
//!
//! [`RuleSet::annotate`] applies the matching rule's directives, adds the
//! `X-Varnish-TTL` header when configured, and always makes sure the
//! response varies on `Cookie`, even when no rule matched.

pub mod annotate;
pub mod controls;
pub mod error;
pub mod headers;
pub mod matcher;
pub mod options;
pub mod rule;

pub use annotate::{Annotation, annotate_response};
pub use controls::{CacheControls, Directive, ResolvedControls, parse_date};
pub use error::Error;
pub use headers::{CacheHeaders, SESSION_VARY, VARNISH_TTL_HEADER};
pub use matcher::{And, Any, BoxMatcher, MatcherExt, Not, Or, RequestMatcher};
pub use options::CacheOptions;
pub use rule::{Rule, RuleSet, RuleSetBuilder};
