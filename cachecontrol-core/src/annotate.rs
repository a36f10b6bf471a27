//! Writing rule options to a response.

use tracing::trace;

use crate::error::Error;
use crate::headers::{CacheHeaders, SESSION_VARY, VARNISH_TTL_HEADER};
use crate::options::CacheOptions;

/// Summary of what an annotation changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotation {
    /// Index of the matching rule, if any.
    pub rule: Option<usize>,
    /// Cache-control directives were applied.
    pub controls_applied: bool,
    /// The TTL header received a new value.
    pub ttl_applied: bool,
    /// `Cookie` was added to `Vary`.
    pub vary_updated: bool,
}

/// Applies `options` to `response` and makes it vary on `Cookie`.
///
/// `Cookie` already listed in `Vary` under any letter case (`cookie`,
/// `COOKIE`) counts as present and leaves the list untouched.
///
/// `None` means no rule matched: nothing but the `Vary` step runs. This is the
/// response half of [`RuleSet::annotate`](crate::RuleSet::annotate), usable
/// when the rule was chosen earlier, before the request was handed on.
///
/// # Errors
///
/// Fails when a date in the controls cannot be parsed or a header value
/// cannot be written. The response may already carry some changes then.
pub fn annotate_response<R>(
    options: Option<&CacheOptions>,
    response: &mut R,
) -> Result<Annotation, Error>
where
    R: CacheHeaders + ?Sized,
{
    let mut annotation = Annotation::default();

    if let Some(options) = options {
        if !options.controls.is_empty() {
            let resolved = options.controls.resolve()?;
            trace!(directives = ?resolved.directives, "applying cache controls");
            response.set_cache(&resolved)?;
            annotation.controls_applied = true;
        }

        if let Some(ttl) = options.varnish_ttl {
            annotation.ttl_applied = response.add_header(VARNISH_TTL_HEADER, &ttl.to_string())?;
            trace!(ttl, written = annotation.ttl_applied, "varnish ttl header");
        }
    }

    let mut vary = response.vary();
    if !vary
        .iter()
        .any(|header| header.eq_ignore_ascii_case(SESSION_VARY))
    {
        vary.push(SESSION_VARY.to_string());
        response.set_vary(&vary)?;
        annotation.vary_updated = true;
        trace!(?vary, "vary updated");
    }

    Ok(annotation)
}
