//! Header matcher configuration.

use cachecontrol_core::{Any, MatcherExt};
use cachecontrol_http::HttpMatcher;
use cachecontrol_http::matchers::{Header, Operation};
use http::header::{HeaderName, HeaderValue as HttpHeaderValue};
use http::request::Parts;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Header value configuration.
///
/// ```yaml
/// # Shorthand forms
/// Content-Type: "application/json"           # Implicit Eq
/// Accept: ["application/json", "text/html"]  # Implicit In
///
/// # Explicit operation form
/// X-Custom:
///   contains: "value"
/// ```
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(untagged)]
pub enum HeaderValue {
    Eq(String),
    In(Vec<String>),
    Operation(HeaderValueOperation),
}

#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(rename_all = "lowercase")]
pub enum HeaderValueOperation {
    Eq(String),
    In(Vec<String>),
    Contains(String),
    Regex(String),
    /// Header exists (value is ignored)
    #[serde(deserialize_with = "deserialize_exist")]
    Exist,
}

fn deserialize_exist<'de, D>(deserializer: D) -> Result<(), D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::IgnoredAny;
    IgnoredAny::deserialize(deserializer)?;
    Ok(())
}

/// Map of header names to their value operations. All entries must match.
pub type HeaderOperation = IndexMap<String, HeaderValue>;

pub(super) fn into_matcher(headers: HeaderOperation) -> Result<HttpMatcher, ConfigError> {
    let mut matchers = headers
        .into_iter()
        .map(|(name, value)| -> Result<HttpMatcher, ConfigError> {
            let name = parse_header_name(&name)?;
            Ok(Box::new(Header::new(header_value_to_operation(name, value)?)))
        });

    let first = match matchers.next() {
        Some(matcher) => matcher?,
        // `Header: {}` constrains nothing.
        None => return Ok(Box::new(Any::<Parts>::new())),
    };
    matchers.try_fold(first, |acc, matcher| Ok(acc.and(matcher?).boxed()))
}

fn parse_header_name(name: &str) -> Result<HeaderName, ConfigError> {
    name.parse()
        .map_err(|e| ConfigError::InvalidHeaderName(name.to_string(), e))
}

fn parse_header_value(value: &str) -> Result<HttpHeaderValue, ConfigError> {
    value
        .parse()
        .map_err(|e| ConfigError::InvalidHeaderValue(value.to_string(), e))
}

fn parse_header_values(values: &[String]) -> Result<Vec<HttpHeaderValue>, ConfigError> {
    values.iter().map(|v| parse_header_value(v)).collect()
}

fn header_value_to_operation(
    name: HeaderName,
    header_value: HeaderValue,
) -> Result<Operation, ConfigError> {
    match header_value {
        HeaderValue::Eq(value) | HeaderValue::Operation(HeaderValueOperation::Eq(value)) => {
            Ok(Operation::Eq(name, parse_header_value(&value)?))
        }
        HeaderValue::In(values) | HeaderValue::Operation(HeaderValueOperation::In(values)) => {
            Ok(Operation::In(name, parse_header_values(&values)?))
        }
        HeaderValue::Operation(HeaderValueOperation::Contains(substring)) => {
            Ok(Operation::Contains(name, substring))
        }
        HeaderValue::Operation(HeaderValueOperation::Regex(pattern)) => Regex::new(&pattern)
            .map(|regex| Operation::Regex(name, regex))
            .map_err(|error| ConfigError::InvalidRegex { pattern, error }),
        HeaderValue::Operation(HeaderValueOperation::Exist) => Ok(Operation::Exist(name)),
    }
}
