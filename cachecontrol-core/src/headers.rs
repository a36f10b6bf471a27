//! Response surface written by the annotation.

use crate::controls::ResolvedControls;
use crate::error::Error;

/// Header carrying the reverse-proxy TTL.
pub const VARNISH_TTL_HEADER: &str = "X-Varnish-TTL";

/// Request header every annotated response varies on.
pub const SESSION_VARY: &str = "Cookie";

/// Mutable view of a response's caching headers.
///
/// Implemented by protocol crates; `cachecontrol-http` implements it on top
/// of `http::HeaderMap`.
pub trait CacheHeaders {
    /// Applies resolved controls to the response's cache state.
    fn set_cache(&mut self, controls: &ResolvedControls) -> Result<(), Error>;

    /// Adds `value` to header `name` without replacing what is already there.
    ///
    /// Returns `false` when the header already carried exactly this value.
    fn add_header(&mut self, name: &str, value: &str) -> Result<bool, Error>;

    /// Returns the request header names the response varies on, in order.
    fn vary(&self) -> Vec<String>;

    /// Replaces the whole `Vary` list.
    fn set_vary(&mut self, vary: &[String]) -> Result<(), Error>;
}

impl<T> CacheHeaders for &mut T
where
    T: CacheHeaders + ?Sized,
{
    fn set_cache(&mut self, controls: &ResolvedControls) -> Result<(), Error> {
        (**self).set_cache(controls)
    }

    fn add_header(&mut self, name: &str, value: &str) -> Result<bool, Error> {
        (**self).add_header(name, value)
    }

    fn vary(&self) -> Vec<String> {
        (**self).vary()
    }

    fn set_vary(&mut self, vary: &[String]) -> Result<(), Error> {
        (**self).set_vary(vary)
    }
}
