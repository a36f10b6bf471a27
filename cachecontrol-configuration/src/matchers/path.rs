//! Path matcher configuration.

use cachecontrol_http::HttpMatcher;
use cachecontrol_http::matchers::Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Path matcher operation.
///
/// Supports both single pattern and list of patterns:
/// ```yaml
/// # Single pattern
/// - Path: "/api/{tail}*"
///
/// # Multiple patterns
/// - Path:
///     in:
///       - "/api/v1/users"
///       - "/api/v2/users"
/// ```
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(untagged)]
pub enum PathOperation {
    /// Single pattern: `Path: "/api/{id}"`
    Pattern(String),
    /// Multiple patterns: `Path: { in: [...] }`
    In { r#in: Vec<String> },
}

impl PathOperation {
    /// Compiles the pattern(s) into a boxed matcher.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyPathList`] for `in: []`, [`ConfigError::InvalidPath`]
    /// for a malformed pattern.
    pub fn into_matcher(self) -> Result<HttpMatcher, ConfigError> {
        match self {
            PathOperation::Pattern(pattern) => Ok(Box::new(Path::try_new(pattern)?)),
            PathOperation::In { r#in: patterns } if patterns.is_empty() => {
                Err(ConfigError::EmptyPathList)
            }
            PathOperation::In { r#in: patterns } => Ok(Box::new(Path::try_new_in(patterns)?)),
        }
    }
}
