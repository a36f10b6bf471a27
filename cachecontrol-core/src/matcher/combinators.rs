//! Logical combinators for composing matchers.
//!
//! ```
//! use cachecontrol_core::matcher::{Any, MatcherExt, RequestMatcher};
//!
//! let matcher = Any::<u8>::new().and(Any::new()).not();
//! assert!(!matcher.matches(&1));
//! ```

use super::RequestMatcher;

/// Inverts a matcher.
#[derive(Debug)]
pub struct Not<M> {
    matcher: M,
}

impl<M> Not<M> {
    /// Creates a new `Not` combinator wrapping the given matcher.
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }
}

impl<M> RequestMatcher for Not<M>
where
    M: RequestMatcher,
{
    type Subject = M::Subject;

    fn matches(&self, request: &Self::Subject) -> bool {
        !self.matcher.matches(request)
    }
}

/// Requires both matchers to match.
///
/// Short-circuits: if the left matcher fails, the right one is not evaluated.
#[derive(Debug)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator from two matchers.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> RequestMatcher for And<L, R>
where
    L: RequestMatcher,
    R: RequestMatcher<Subject = L::Subject>,
{
    type Subject = L::Subject;

    fn matches(&self, request: &Self::Subject) -> bool {
        self.left.matches(request) && self.right.matches(request)
    }
}

/// Requires either matcher to match.
///
/// Short-circuits: if the left matcher matches, the right one is not evaluated.
#[derive(Debug)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator from two matchers.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L, R> RequestMatcher for Or<L, R>
where
    L: RequestMatcher,
    R: RequestMatcher<Subject = L::Subject>,
{
    type Subject = L::Subject;

    fn matches(&self, request: &Self::Subject) -> bool {
        self.left.matches(request) || self.right.matches(request)
    }
}

/// Extension trait for fluent matcher composition.
pub trait MatcherExt: RequestMatcher + Sized {
    /// Combines this matcher with another using AND logic.
    fn and<R>(self, right: R) -> And<Self, R>
    where
        R: RequestMatcher<Subject = Self::Subject>,
    {
        And::new(self, right)
    }

    /// Combines this matcher with another using OR logic.
    fn or<R>(self, right: R) -> Or<Self, R>
    where
        R: RequestMatcher<Subject = Self::Subject>,
    {
        Or::new(self, right)
    }

    /// Inverts this matcher.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Boxes this matcher into a trait object.
    ///
    /// Rules store their matchers boxed, so this is the usual last step
    /// before handing a matcher to a [`Rule`](crate::Rule).
    fn boxed(self) -> Box<dyn RequestMatcher<Subject = Self::Subject> + Send + Sync>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: RequestMatcher + Sized> MatcherExt for T {}
