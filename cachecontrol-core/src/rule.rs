//! Rules and ordered rule sets.

use std::fmt::Debug;

use tracing::debug;

use crate::annotate::{Annotation, annotate_response};
use crate::error::Error;
use crate::headers::CacheHeaders;
use crate::matcher::{BoxMatcher, RequestMatcher};
use crate::options::CacheOptions;

/// A matcher paired with the options applied when it matches.
///
/// A rule without a matcher matches every request.
pub struct Rule<S> {
    matcher: Option<BoxMatcher<S>>,
    options: CacheOptions,
}

impl<S> Rule<S> {
    /// Creates a rule from an optional boxed matcher.
    pub fn new(matcher: Option<BoxMatcher<S>>, options: CacheOptions) -> Self {
        Self { matcher, options }
    }

    /// Creates a rule applying to requests accepted by `matcher`.
    pub fn matching<M>(matcher: M, options: CacheOptions) -> Self
    where
        M: RequestMatcher<Subject = S> + Send + Sync + 'static,
    {
        Self::new(Some(Box::new(matcher)), options)
    }

    /// Creates a rule applying to every request.
    pub fn any(options: CacheOptions) -> Self {
        Self::new(None, options)
    }

    /// Returns `true` if the rule applies to `request`.
    pub fn matches(&self, request: &S) -> bool {
        self.matcher
            .as_ref()
            .is_none_or(|matcher| matcher.matches(request))
    }

    /// Options applied by this rule.
    pub fn options(&self) -> &CacheOptions {
        &self.options
    }
}

impl<S> Debug for Rule<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("matcher", &self.matcher.as_ref().map(|_| "..."))
            .field("options", &self.options)
            .finish()
    }
}

/// Ordered, immutable list of rules. The first matching rule wins.
///
/// Build it once at startup with [`RuleSet::builder`] and share it behind an
/// `Arc`; evaluation only reads it.
///
/// ```
/// use cachecontrol_core::{Any, CacheControls, CacheOptions, RuleSet};
///
/// let rules = RuleSet::<()>::builder()
///     .add(Any::new(), CacheOptions::new().varnish_ttl(120))
///     .add_any(CacheOptions::new().controls(CacheControls::new().private(true)))
///     .build();
///
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules.options_for(&()).and_then(|o| o.varnish_ttl), Some(120));
/// ```
pub struct RuleSet<S> {
    rules: Vec<Rule<S>>,
}

impl<S> RuleSet<S> {
    /// Creates a new builder.
    pub fn builder() -> RuleSetBuilder<S> {
        RuleSetBuilder::new()
    }

    /// Index of the first rule matching `request`.
    pub fn position(&self, request: &S) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(request))
    }

    /// Options of the first rule matching `request`.
    pub fn options_for(&self, request: &S) -> Option<&CacheOptions> {
        self.position(request).map(|index| self.rules[index].options())
    }

    /// Rule at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&Rule<S>> {
        self.rules.get(index)
    }

    /// Iterates over the rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule<S>> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolves every rule's controls, failing on the first invalid one.
    ///
    /// Dates are otherwise parsed lazily, when a rule first matches. Call this
    /// at startup to surface configuration mistakes early.
    pub fn validate(&self) -> Result<(), Error> {
        self.rules.iter().try_for_each(|rule| rule.options.validate())
    }

    /// Annotates `response` according to the first rule matching `request`.
    ///
    /// The response always ends up varying on `Cookie`, whether or not a rule
    /// matched.
    ///
    /// # Errors
    ///
    /// See [`annotate_response`]. Errors only concern the matched rule; the
    /// rule set itself is unchanged.
    pub fn annotate<R>(&self, request: &S, response: &mut R) -> Result<Annotation, Error>
    where
        R: CacheHeaders + ?Sized,
    {
        match self.position(request) {
            Some(index) => {
                debug!(rule = index, "cache rule matched");
                let annotation = annotate_response(Some(self.rules[index].options()), response)?;
                Ok(Annotation {
                    rule: Some(index),
                    ..annotation
                })
            }
            None => {
                debug!("no cache rule matched");
                annotate_response(None, response)
            }
        }
    }
}

impl<S> Default for RuleSet<S> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<S> Debug for RuleSet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.rules).finish()
    }
}

/// Builder for [`RuleSet`]. Rules are evaluated in the order they are added.
pub struct RuleSetBuilder<S> {
    rules: Vec<Rule<S>>,
}

impl<S> RuleSetBuilder<S> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule applying `options` to requests accepted by `matcher`.
    pub fn add<M>(self, matcher: M, options: CacheOptions) -> Self
    where
        M: RequestMatcher<Subject = S> + Send + Sync + 'static,
    {
        self.rule(Rule::matching(matcher, options))
    }

    /// Appends a rule applying `options` to every request.
    ///
    /// Rules added after it are never reached.
    pub fn add_any(self, options: CacheOptions) -> Self {
        self.rule(Rule::any(options))
    }

    /// Appends a pre-built rule.
    pub fn rule(mut self, rule: Rule<S>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Freezes the rules.
    pub fn build(self) -> RuleSet<S> {
        RuleSet { rules: self.rules }
    }
}

impl<S> Default for RuleSetBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
