//! Declarative configuration for cachecontrol rules.
//!
//! A configuration is a YAML document listing rules in evaluation order:
//!
//! ```
//! use cachecontrol_configuration::Config;
//!
//! let config = Config::from_yaml(r#"
//! rules:
//!   - match:
//!       - Path: "/api/{tail}*"
//!     controls:
//!       public: true
//!       max_age: 60
//!     varnish_ttl: 120
//!   - controls:
//!       private: true
//! "#).unwrap();
//!
//! let rules = config.into_rule_set().unwrap();
//! assert_eq!(rules.len(), 2);
//! ```
//!
//! Unlike rule sets assembled in code, a loaded configuration is validated
//! up front: an unparseable `last_modified` date is reported by
//! [`Config::into_rule_set`] instead of failing requests later.

pub mod error;
pub mod matchers;
pub mod rule;

use cachecontrol_http::HttpRuleSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;
pub use matchers::Matcher;
pub use rule::RuleConfig;

/// Root of a configuration document.
#[derive(Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl Config {
    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_saphyr::from_str(yaml)?)
    }

    /// Builds the rule set, checking every rule's controls.
    pub fn into_rule_set(self) -> Result<HttpRuleSet, ConfigError> {
        let rule_count = self.rules.len();
        let builder = self.rules.into_iter().enumerate().try_fold(
            HttpRuleSet::builder(),
            |builder, (index, rule)| -> Result<_, ConfigError> {
                rule.options()
                    .validate()
                    .map_err(|source| ConfigError::InvalidRule { index, source })?;
                Ok(builder.rule(rule.into_rule()?))
            },
        )?;
        debug!(rules = rule_count, "cache-control configuration loaded");
        Ok(builder.build())
    }
}
