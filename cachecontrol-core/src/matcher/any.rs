//! Matcher that accepts every request.

use std::marker::PhantomData;

use super::RequestMatcher;

/// A matcher that always matches.
///
/// Useful as a starting point for matcher chains or as an explicit
/// catch-all.
#[derive(Clone, Copy)]
pub struct Any<S> {
    _phantom: PhantomData<fn(&S)>,
}

impl<S> std::fmt::Debug for Any<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Any").finish()
    }
}

impl<S> Default for Any<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Any<S> {
    /// Creates a new catch-all matcher.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<S> RequestMatcher for Any<S> {
    type Subject = S;

    fn matches(&self, _request: &Self::Subject) -> bool {
        true
    }
}
