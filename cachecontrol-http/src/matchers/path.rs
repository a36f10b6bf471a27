//! Path pattern matcher.
//!
//! Patterns use [actix-router](https://docs.rs/actix-router) syntax:
//!
//! - `{name}` matches a path segment
//! - `{name:regex}` matches with a regex constraint
//! - `{tail}*` matches the remaining path segments

use actix_router::ResourceDef;
use cachecontrol_core::RequestMatcher;
use http::request::Parts;
use regex::Regex;
use thiserror::Error;

/// Dynamic segments allowed in one pattern.
const MAX_DYNAMIC_SEGMENTS: usize = 16;

/// A path pattern that cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid path pattern {pattern:?}: {reason}")]
pub struct InvalidPathPattern {
    pattern: String,
    reason: String,
}

impl InvalidPathPattern {
    fn new(pattern: &str, reason: impl Into<String>) -> Self {
        Self {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// The rejected pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// A matcher accepting requests whose path matches a pattern.
///
/// ```
/// use cachecontrol_http::matchers::Path;
///
/// let users = Path::new("/api/users/{id}");
/// let api = Path::new("/api/{tail}*");
/// let either = Path::new_in(["/v1/users", "/v2/users"]);
/// # let _ = (users, api, either);
/// ```
#[derive(Debug)]
pub struct Path {
    resource: ResourceDef,
}

impl Path {
    /// Matches a single pattern.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is malformed. Use [`Path::try_new`] for patterns
    /// that are not known at compile time.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            resource: ResourceDef::new(pattern.into()),
        }
    }

    /// Matches any of several patterns.
    ///
    /// # Panics
    ///
    /// Panics if a pattern is malformed, see [`Path::try_new_in`].
    pub fn new_in<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        Self {
            resource: ResourceDef::new(patterns),
        }
    }

    /// Matches a single pattern, rejecting malformed ones.
    pub fn try_new(pattern: impl Into<String>) -> Result<Self, InvalidPathPattern> {
        let pattern = pattern.into();
        check_pattern(&pattern)?;
        Ok(Self::new(pattern))
    }

    /// Matches any of several patterns, rejecting malformed ones.
    pub fn try_new_in<I, P>(patterns: I) -> Result<Self, InvalidPathPattern>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        patterns.iter().try_for_each(|pattern| check_pattern(pattern))?;
        Ok(Self::new_in(patterns))
    }
}

/// Checks `pattern` against the rules `ResourceDef` enforces by panicking.
fn check_pattern(pattern: &str) -> Result<(), InvalidPathPattern> {
    let mut unprocessed = pattern;
    let mut captures = String::new();
    let mut segments = 0;

    while let Some(start) = unprocessed.find('{') {
        let rest = &unprocessed[start..];
        let mut nesting = 0usize;
        let close = rest
            .find(|c| match c {
                '{' => {
                    nesting += 1;
                    false
                }
                '}' => {
                    nesting = nesting.saturating_sub(1);
                    nesting == 0
                }
                _ => false,
            })
            .ok_or_else(|| InvalidPathPattern::new(pattern, "unclosed dynamic segment"))?;

        let param = &rest[1..close];
        let after = &rest[close + 1..];
        let tail = after == "*";
        let (name, regex) = match param.split_once(':') {
            Some(_) if tail => {
                return Err(InvalidPathPattern::new(
                    pattern,
                    "tail segment cannot have a custom regex",
                ));
            }
            Some((name, regex)) => (name, regex),
            None if tail => (param, ".*"),
            None => (param, "[^/]+"),
        };

        captures.push_str(&format!("(?P<{name}>{regex})"));
        segments += 1;
        unprocessed = if tail { "" } else { after };
    }

    if segments > MAX_DYNAMIC_SEGMENTS {
        return Err(InvalidPathPattern::new(
            pattern,
            format!("more than {MAX_DYNAMIC_SEGMENTS} dynamic segments"),
        ));
    }
    Regex::new(&captures)
        .map(|_| ())
        .map_err(|error| InvalidPathPattern::new(pattern, error.to_string()))
}

impl RequestMatcher for Path {
    type Subject = Parts;

    fn matches(&self, request: &Parts) -> bool {
        self.resource.is_match(request.uri.path())
    }
}
