//! Rule configuration.

use cachecontrol_core::{CacheControls, CacheOptions, MatcherExt, Rule};
use cachecontrol_http::{HttpMatcher, HttpRule};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::matchers::Matcher;

/// One rule of the configuration.
///
/// ```yaml
/// - match:
///     - Path: "/api/{tail}*"
///     - Method: [GET, HEAD]
///   controls:
///     public: true
///     max_age: 60
///   varnish_ttl: 120
/// ```
///
/// All `match` entries must hold for the rule to apply. A rule without
/// `match` entries applies to every request.
#[derive(Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Conditions, combined with AND. Empty means catch-all.
    #[serde(default, rename = "match", skip_serializing_if = "Vec::is_empty")]
    pub matchers: Vec<Matcher>,
    /// Cache-control directives applied to matching responses.
    #[serde(default)]
    pub controls: CacheControls,
    /// `X-Varnish-TTL` value in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub varnish_ttl: Option<u64>,
}

impl RuleConfig {
    /// Options of the rule, without its matchers.
    pub fn options(&self) -> CacheOptions {
        CacheOptions {
            controls: self.controls.clone(),
            varnish_ttl: self.varnish_ttl,
        }
    }

    /// Builds the runtime rule. Dates in `controls` are not checked here.
    pub fn into_rule(self) -> Result<HttpRule, ConfigError> {
        let options = self.options();
        let matcher = self
            .matchers
            .into_iter()
            .map(Matcher::into_matcher)
            .try_fold(None, |acc: Option<HttpMatcher>, matcher| {
                let matcher = matcher?;
                Ok::<_, ConfigError>(Some(match acc {
                    Some(acc) => acc.and(matcher).boxed(),
                    None => matcher,
                }))
            })?;
        Ok(Rule::new(matcher, options))
    }
}
