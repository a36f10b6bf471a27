use cachecontrol_http::matchers::InvalidPathPattern;
use thiserror::Error;

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid YAML or does not fit the schema.
    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_saphyr::Error),

    /// A `Method` entry is not a valid method token.
    #[error("invalid HTTP method {0:?}")]
    InvalidMethod(String, #[source] http::method::InvalidMethod),

    /// A `Header` entry names an invalid header.
    #[error("invalid header name {0:?}")]
    InvalidHeaderName(String, #[source] http::header::InvalidHeaderName),

    /// A `Header` entry compares against an invalid header value.
    #[error("invalid header value {0:?}")]
    InvalidHeaderValue(String, #[source] http::header::InvalidHeaderValue),

    /// A `Host` or header `regex` pattern does not compile.
    #[error("invalid regex {pattern:?}: {error}")]
    InvalidRegex {
        /// The rejected pattern.
        pattern: String,
        /// Compilation error.
        #[source]
        error: regex::Error,
    },

    /// A `Path` pattern is malformed.
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathPattern),

    /// `Path: { in: [] }`.
    #[error("path list must not be empty")]
    EmptyPathList,

    /// `Method: []`.
    #[error("method list must not be empty")]
    EmptyMethodList,

    /// The controls of rule `index` cannot be resolved.
    #[error("rule #{index} is invalid")]
    InvalidRule {
        /// Position of the rule in the document.
        index: usize,
        /// Resolution error.
        #[source]
        source: cachecontrol_core::Error,
    },
}
