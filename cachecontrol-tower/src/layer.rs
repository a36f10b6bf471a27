use std::sync::Arc;

use cachecontrol_http::HttpRuleSet;
use tower::Layer;

use crate::service::CacheControlService;

/// Tower layer annotating responses with the rules of a shared [`HttpRuleSet`].
///
/// The rule set is immutable and shared by every service produced by the
/// layer.
#[derive(Debug, Clone)]
pub struct CacheControlLayer {
    rules: Arc<HttpRuleSet>,
}

impl CacheControlLayer {
    /// Creates a layer from a rule set or an already shared one.
    pub fn new(rules: impl Into<Arc<HttpRuleSet>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    /// The shared rules.
    pub fn rules(&self) -> &Arc<HttpRuleSet> {
        &self.rules
    }
}

impl<S> Layer<S> for CacheControlLayer {
    type Service = CacheControlService<S>;

    fn layer(&self, upstream: S) -> Self::Service {
        CacheControlService::new(upstream, Arc::clone(&self.rules))
    }
}
