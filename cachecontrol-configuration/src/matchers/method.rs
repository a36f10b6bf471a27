//! Method matcher configuration.

use cachecontrol_http::HttpMatcher;
use cachecontrol_http::matchers::Method;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// HTTP method operation.
///
/// ```yaml
/// - Method: GET
/// - Method: [GET, HEAD]
/// ```
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(untagged)]
pub enum MethodOperation {
    Eq(String),
    In(Vec<String>),
}

impl MethodOperation {
    /// Parses the method name(s) into a boxed matcher.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyMethodList`] for an empty list,
    /// [`ConfigError::InvalidMethod`] for a name that is not a method token.
    pub fn into_matcher(self) -> Result<HttpMatcher, ConfigError> {
        let names = match self {
            MethodOperation::Eq(method) => vec![method],
            MethodOperation::In(methods) if methods.is_empty() => {
                return Err(ConfigError::EmptyMethodList);
            }
            MethodOperation::In(methods) => methods,
        };

        let methods = names
            .into_iter()
            .map(|name| {
                name.parse::<http::Method>()
                    .map_err(|e| ConfigError::InvalidMethod(name.clone(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Box::new(Method::new_in(methods)))
    }
}
