use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use cachecontrol_core::{Annotation, annotate_response};
use cachecontrol_http::{HttpRuleSet, ResponseExt};
use futures::ready;
use http::Response;
use pin_project::pin_project;
use tracing::{trace, warn};

use crate::error::Error;

/// Future annotating the response of the inner service.
#[pin_project]
pub struct CacheControlFuture<F> {
    #[pin]
    inner: F,
    rules: Arc<HttpRuleSet>,
    rule: Option<usize>,
}

impl<F> CacheControlFuture<F> {
    /// Wraps the upstream future. `rule` is the index of the matched rule.
    pub fn new(inner: F, rules: Arc<HttpRuleSet>, rule: Option<usize>) -> Self {
        Self { inner, rules, rule }
    }
}

impl<F, ResBody, E> Future for CacheControlFuture<F>
where
    F: Future<Output = Result<Response<ResBody>, E>>,
{
    type Output = Result<Response<ResBody>, Error<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        let mut response = match ready!(this.inner.poll(cx)) {
            Ok(response) => response,
            Err(error) => return Poll::Ready(Err(Error::Upstream(error))),
        };

        let options = this
            .rule
            .and_then(|index| this.rules.get(index))
            .map(|rule| rule.options());

        match annotate_response(options, &mut response.cache_headers()) {
            Ok(annotation) => {
                trace!(
                    annotation = ?Annotation { rule: *this.rule, ..annotation },
                    "response annotated"
                );
                Poll::Ready(Ok(response))
            }
            Err(error) => {
                warn!(rule = ?this.rule, %error, "cache-control annotation failed");
                Poll::Ready(Err(Error::Annotate(error)))
            }
        }
    }
}
