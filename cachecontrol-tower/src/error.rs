use thiserror::Error;

/// Error returned by [`CacheControlService`](crate::CacheControlService).
#[derive(Debug, Error)]
pub enum Error<E> {
    /// The wrapped service failed.
    #[error("upstream service failed")]
    Upstream(#[source] E),

    /// The matched rule could not be applied to the response.
    #[error("cache-control annotation failed")]
    Annotate(#[from] cachecontrol_core::Error),
}
