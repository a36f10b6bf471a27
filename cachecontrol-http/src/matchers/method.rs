//! HTTP method matcher.

use cachecontrol_core::RequestMatcher;
use http::request::Parts;

/// A matcher accepting requests by HTTP method.
///
/// ```
/// use cachecontrol_http::matchers::Method;
///
/// let single = Method::new(http::Method::GET);
/// let several = Method::new_in(vec![http::Method::GET, http::Method::HEAD]);
/// let parsed = Method::parse("PURGE").unwrap();
/// # let _ = (single, several, parsed);
/// ```
#[derive(Debug, Clone)]
pub struct Method {
    methods: Vec<http::Method>,
}

impl Method {
    /// Matches a single method.
    pub fn new(method: http::Method) -> Self {
        Self {
            methods: vec![method],
        }
    }

    /// Matches any of the given methods.
    pub fn new_in(methods: Vec<http::Method>) -> Self {
        Self { methods }
    }

    /// Matches a method given by name.
    ///
    /// # Errors
    ///
    /// Returns [`http::method::InvalidMethod`] if `method` is not a valid
    /// method token.
    pub fn parse(method: &str) -> Result<Self, http::method::InvalidMethod> {
        Ok(Self::new(method.parse()?))
    }
}

impl RequestMatcher for Method {
    type Subject = Parts;

    fn matches(&self, request: &Parts) -> bool {
        self.methods.contains(&request.method)
    }
}
