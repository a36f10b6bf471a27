//! Request matching.
//!
//! This module provides the [`RequestMatcher`] trait used by rules to decide
//! whether they apply to an incoming request.
//!
//! ## Composability
//!
//! Matchers are composed using logical combinators:
//!
//! - [`And`] - Both matchers must match
//! - [`Or`] - Either matcher is sufficient
//! - [`Not`] - Inverts a matcher
//!
//! A rule without any matcher behaves like [`Any`]: it matches everything.

pub mod any;
pub mod combinators;

use std::sync::Arc;

pub use any::Any;
pub use combinators::{And, MatcherExt, Not, Or};

/// Boxed matcher for dynamic dispatch.
pub type BoxMatcher<S> = Box<dyn RequestMatcher<Subject = S> + Send + Sync>;

/// Predicate over an incoming request.
///
/// Matchers are **protocol-agnostic**. The `Subject` associated type defines
/// what is inspected; for HTTP it is usually `http::request::Parts`.
///
/// Evaluation is synchronous and must not have side effects: the same
/// matcher is shared by every request handled by a rule set.
pub trait RequestMatcher {
    /// The request type inspected by this matcher.
    type Subject;

    /// Returns `true` when the rule owning this matcher applies to `request`.
    fn matches(&self, request: &Self::Subject) -> bool;
}

impl<T> RequestMatcher for Box<T>
where
    T: RequestMatcher + ?Sized,
{
    type Subject = T::Subject;

    fn matches(&self, request: &Self::Subject) -> bool {
        self.as_ref().matches(request)
    }
}

impl<T> RequestMatcher for &T
where
    T: RequestMatcher + ?Sized,
{
    type Subject = T::Subject;

    fn matches(&self, request: &Self::Subject) -> bool {
        (*self).matches(request)
    }
}

impl<T> RequestMatcher for Arc<T>
where
    T: RequestMatcher + ?Sized,
{
    type Subject = T::Subject;

    fn matches(&self, request: &Self::Subject) -> bool {
        self.as_ref().matches(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl RequestMatcher for Even {
        type Subject = i32;

        fn matches(&self, request: &i32) -> bool {
            request % 2 == 0
        }
    }

    #[test]
    fn test_matcher_ext_with_box_dyn() {
        let m1: BoxMatcher<i32> = Box::new(Even);
        let m2: BoxMatcher<i32> = Box::new(Any::<i32>::new());

        let combined = m1.or(m2);

        assert!(combined.matches(&3));
    }

    #[test]
    fn test_matcher_ext_chaining_with_box_dyn() {
        let m1: BoxMatcher<i32> = Box::new(Any::<i32>::new());
        let m2: BoxMatcher<i32> = Box::new(Even);
        let m3: BoxMatcher<i32> = Box::new(Even);

        // (any AND even) OR even, inverted
        let combined = m1.and(m2).or(m3).not();

        assert!(combined.matches(&3));
        assert!(!combined.matches(&4));
    }

    #[test]
    fn test_matcher_boxed_in_vec() {
        let matchers: Vec<BoxMatcher<i32>> = vec![Even.boxed(), Even.not().boxed()];

        assert!(matchers[0].matches(&2));
        assert!(!matchers[1].matches(&2));
    }

    #[test]
    fn test_arc_and_ref_delegate() {
        let shared = Arc::new(Even);
        assert!(shared.matches(&8));
        assert!((&Even).matches(&8));
    }
}
