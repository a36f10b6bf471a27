//! Request matcher configuration.

mod header;
mod method;
mod path;

use cachecontrol_http::HttpMatcher;
use cachecontrol_http::matchers::Host;
use serde::{Deserialize, Serialize};

pub use header::{HeaderOperation, HeaderValue, HeaderValueOperation};
pub use method::MethodOperation;
pub use path::PathOperation;

use crate::error::ConfigError;

/// One entry of a rule's `match` list.
// Externally tagged: `- Method: GET`, `- Path: "/api/{tail}*"`, ...
#[derive(Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Matcher {
    /// HTTP method or list of methods.
    Method(MethodOperation),
    /// Path pattern or `in` list of patterns.
    Path(PathOperation),
    /// Regular expression over the request host, without port.
    Host(String),
    /// Header name to value operation. All entries must match.
    Header(HeaderOperation),
}

impl Matcher {
    /// Builds the runtime matcher.
    pub fn into_matcher(self) -> Result<HttpMatcher, ConfigError> {
        match self {
            Matcher::Method(operation) => operation.into_matcher(),
            Matcher::Path(operation) => operation.into_matcher(),
            Matcher::Host(pattern) => Host::parse(&pattern)
                .map(|host| -> HttpMatcher { Box::new(host) })
                .map_err(|error| ConfigError::InvalidRegex { pattern, error }),
            Matcher::Header(operation) => header::into_matcher(operation),
        }
    }
}
