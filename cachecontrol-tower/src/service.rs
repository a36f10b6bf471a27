use std::sync::Arc;
use std::task::{Context, Poll};

use cachecontrol_http::HttpRuleSet;
use http::{Request, Response};
use tower::Service;
use tracing::debug;

use crate::error::Error;
use crate::future::CacheControlFuture;

/// Service that annotates the responses of `upstream`.
///
/// The rule is chosen from the request head before the request is forwarded;
/// the response is annotated exactly once, when the upstream future resolves.
#[derive(Debug)]
pub struct CacheControlService<S> {
    upstream: S,
    rules: Arc<HttpRuleSet>,
}

impl<S> CacheControlService<S> {
    /// Wraps `upstream`.
    pub fn new(upstream: S, rules: Arc<HttpRuleSet>) -> Self {
        CacheControlService { upstream, rules }
    }

    /// The wrapped service.
    pub fn get_ref(&self) -> &S {
        &self.upstream
    }
}

impl<S> Clone for CacheControlService<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            upstream: self.upstream.clone(),
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CacheControlService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
{
    type Response = Response<ResBody>;
    type Error = Error<S::Error>;
    type Future = CacheControlFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.upstream.poll_ready(cx).map_err(Error::Upstream)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let (parts, body) = req.into_parts();
        let rule = self.rules.position(&parts);
        match rule {
            Some(index) => debug!(rule = index, path = parts.uri.path(), "cache rule matched"),
            None => debug!(path = parts.uri.path(), "no cache rule matched"),
        }

        let response = self.upstream.call(Request::from_parts(parts, body));
        CacheControlFuture::new(response, Arc::clone(&self.rules), rule)
    }
}
