//! Options attached to a rule.

use serde::{Deserialize, Serialize};

use crate::controls::CacheControls;
use crate::error::Error;

/// What a matching rule does to a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheOptions {
    /// Cache-control directives. Skipped entirely when empty.
    #[serde(default)]
    pub controls: CacheControls,
    /// Time-to-live hint for a caching reverse proxy, in seconds.
    #[serde(default)]
    pub varnish_ttl: Option<u64>,
}

impl CacheOptions {
    /// Creates options that leave the response untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cache-control directives.
    pub fn controls(self, controls: CacheControls) -> Self {
        Self { controls, ..self }
    }

    /// Sets the reverse-proxy TTL.
    pub fn varnish_ttl(self, ttl: u64) -> Self {
        Self {
            varnish_ttl: Some(ttl),
            ..self
        }
    }

    /// Checks that the controls can be resolved, without applying them.
    pub fn validate(&self) -> Result<(), Error> {
        self.controls.resolve().map(|_| ())
    }
}
