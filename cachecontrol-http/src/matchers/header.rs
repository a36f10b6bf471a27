//! Request header matcher.

use cachecontrol_core::RequestMatcher;
use http::request::Parts;
use http::{HeaderMap, HeaderName, HeaderValue};
use regex::Regex;

/// Matching operations for request headers.
///
/// ```
/// use cachecontrol_http::matchers::Operation;
/// use http::header::{ACCEPT, AUTHORIZATION};
///
/// let json = Operation::Contains(ACCEPT, "json".to_string());
/// let authenticated = Operation::Exist(AUTHORIZATION);
/// # let _ = (json, authenticated);
/// ```
#[derive(Debug, Clone)]
pub enum Operation {
    /// Exact value match.
    Eq(HeaderName, HeaderValue),
    /// Header is present, whatever its value.
    Exist(HeaderName),
    /// Value is one of several.
    In(HeaderName, Vec<HeaderValue>),
    /// Value contains a substring.
    Contains(HeaderName, String),
    /// Value matches a regular expression.
    Regex(HeaderName, Regex),
}

impl Operation {
    /// Checks the operation against every value of the header.
    pub fn check(&self, headers: &HeaderMap) -> bool {
        match self {
            Operation::Eq(name, value) => headers.get_all(name).iter().any(|v| v == value),
            Operation::Exist(name) => headers.contains_key(name),
            Operation::In(name, values) => headers
                .get_all(name)
                .iter()
                .any(|v| values.contains(v)),
            Operation::Contains(name, substring) => headers
                .get_all(name)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .any(|v| v.contains(substring.as_str())),
            Operation::Regex(name, regex) => headers
                .get_all(name)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .any(|v| regex.is_match(v)),
        }
    }
}

/// A matcher accepting requests by header.
#[derive(Debug, Clone)]
pub struct Header {
    operation: Operation,
}

impl Header {
    /// Creates a header matcher.
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }
}

impl RequestMatcher for Header {
    type Subject = Parts;

    fn matches(&self, request: &Parts) -> bool {
        self.operation.check(&request.headers)
    }
}
