//! Error types for response annotation.

use thiserror::Error;

/// Errors raised while resolving cache options or writing them to a response.
#[derive(Debug, Error)]
pub enum Error {
    /// A date directive (`last_modified`, `expires`) could not be parsed.
    #[error("invalid {field} date {value:?}: {source}")]
    InvalidDate {
        /// Name of the directive holding the date.
        field: &'static str,
        /// The raw configured value.
        value: String,
        /// Parse failure of the last attempted format.
        #[source]
        source: chrono::ParseError,
    },

    /// A computed value cannot be represented as a header value.
    #[error("invalid value {value:?} for header {name}")]
    InvalidHeaderValue {
        /// Header name.
        name: String,
        /// Rejected value.
        value: String,
    },
}
