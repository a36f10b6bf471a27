//! Cache-control directives of a rule.
//!
//! [`CacheControls`] is the configured, serializable form. Before it is
//! handed to a response it is resolved into [`ResolvedControls`]: date
//! strings become timestamps and the directive fields become an ordered
//! list of [`Directive`] mutations.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Date-time layouts without an offset, interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Cache-control settings applied to responses of a matching rule.
///
/// Every field is optional; an unset field leaves the response untouched.
/// Boolean directives are tri-state: `Some(true)` adds the directive,
/// `Some(false)` removes it.
///
/// ```
/// use cachecontrol_core::CacheControls;
///
/// let controls = CacheControls::new().public(true).max_age(60);
/// assert!(!controls.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheControls {
    /// Entity tag, quoted on output unless already quoted or weak.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// `Last-Modified` date string, parsed when the rule is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// `Expires` date string, parsed when the rule is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    /// `max-age` in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u64>,
    /// `s-maxage` in seconds. Implies `public`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s_maxage: Option<u64>,
    /// `stale-while-revalidate` in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<u64>,
    /// `stale-if-error` in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stale_if_error: Option<u64>,
    /// `true` makes the response public, `false` private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// `true` makes the response private, `false` public.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// `must-revalidate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_revalidate: Option<bool>,
    /// `proxy-revalidate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_revalidate: Option<bool>,
    /// `no-cache`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_cache: Option<bool>,
    /// `no-store`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_store: Option<bool>,
    /// `no-transform`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_transform: Option<bool>,
    /// `immutable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immutable: Option<bool>,
}

impl CacheControls {
    /// Creates an empty set of controls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity tag.
    pub fn etag(self, etag: impl Into<String>) -> Self {
        Self {
            etag: Some(etag.into()),
            ..self
        }
    }

    /// Sets the `Last-Modified` date string.
    pub fn last_modified(self, date: impl Into<String>) -> Self {
        Self {
            last_modified: Some(date.into()),
            ..self
        }
    }

    /// Sets the `Expires` date string.
    pub fn expires(self, date: impl Into<String>) -> Self {
        Self {
            expires: Some(date.into()),
            ..self
        }
    }

    /// Sets `max-age`.
    pub fn max_age(self, seconds: u64) -> Self {
        Self {
            max_age: Some(seconds),
            ..self
        }
    }

    /// Sets `s-maxage`.
    pub fn s_maxage(self, seconds: u64) -> Self {
        Self {
            s_maxage: Some(seconds),
            ..self
        }
    }

    /// Sets `stale-while-revalidate`.
    pub fn stale_while_revalidate(self, seconds: u64) -> Self {
        Self {
            stale_while_revalidate: Some(seconds),
            ..self
        }
    }

    /// Sets `stale-if-error`.
    pub fn stale_if_error(self, seconds: u64) -> Self {
        Self {
            stale_if_error: Some(seconds),
            ..self
        }
    }

    /// Sets the public visibility flag.
    pub fn public(self, public: bool) -> Self {
        Self {
            public: Some(public),
            ..self
        }
    }

    /// Sets the private visibility flag.
    pub fn private(self, private: bool) -> Self {
        Self {
            private: Some(private),
            ..self
        }
    }

    /// Sets `must-revalidate`.
    pub fn must_revalidate(self, enabled: bool) -> Self {
        Self {
            must_revalidate: Some(enabled),
            ..self
        }
    }

    /// Sets `proxy-revalidate`.
    pub fn proxy_revalidate(self, enabled: bool) -> Self {
        Self {
            proxy_revalidate: Some(enabled),
            ..self
        }
    }

    /// Sets `no-cache`.
    pub fn no_cache(self, enabled: bool) -> Self {
        Self {
            no_cache: Some(enabled),
            ..self
        }
    }

    /// Sets `no-store`.
    pub fn no_store(self, enabled: bool) -> Self {
        Self {
            no_store: Some(enabled),
            ..self
        }
    }

    /// Sets `no-transform`.
    pub fn no_transform(self, enabled: bool) -> Self {
        Self {
            no_transform: Some(enabled),
            ..self
        }
    }

    /// Sets `immutable`.
    pub fn immutable(self, enabled: bool) -> Self {
        Self {
            immutable: Some(enabled),
            ..self
        }
    }

    /// Returns `true` when no directive is configured.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Converts the configured values into the form applied to responses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if `last_modified` or `expires` is not a
    /// recognised date.
    pub fn resolve(&self) -> Result<ResolvedControls, Error> {
        let last_modified = self
            .last_modified
            .as_deref()
            .map(|value| parse_date("last_modified", value))
            .transpose()?;
        let expires = self
            .expires
            .as_deref()
            .map(|value| parse_date("expires", value))
            .transpose()?;

        let mut directives = Vec::new();

        if let Some(seconds) = self.max_age {
            directives.push(Directive::Seconds(Directive::MAX_AGE, seconds));
        }
        if let Some(seconds) = self.s_maxage {
            directives.push(Directive::Public);
            directives.push(Directive::Seconds(Directive::S_MAXAGE, seconds));
        }
        if let Some(seconds) = self.stale_if_error {
            directives.push(Directive::Seconds(Directive::STALE_IF_ERROR, seconds));
        }
        if let Some(seconds) = self.stale_while_revalidate {
            directives.push(Directive::Seconds(
                Directive::STALE_WHILE_REVALIDATE,
                seconds,
            ));
        }

        let flags = [
            (Directive::MUST_REVALIDATE, self.must_revalidate),
            (Directive::PROXY_REVALIDATE, self.proxy_revalidate),
            (Directive::NO_CACHE, self.no_cache),
            (Directive::NO_STORE, self.no_store),
            (Directive::NO_TRANSFORM, self.no_transform),
            (Directive::IMMUTABLE, self.immutable),
        ];
        directives.extend(flags.into_iter().filter_map(|(name, flag)| {
            flag.map(|enabled| {
                if enabled {
                    Directive::Set(name)
                } else {
                    Directive::Remove(name)
                }
            })
        }));

        // Explicit visibility comes last so it wins over the `s_maxage` implication.
        if let Some(public) = self.public {
            directives.push(if public {
                Directive::Public
            } else {
                Directive::Private
            });
        }
        if let Some(private) = self.private {
            directives.push(if private {
                Directive::Private
            } else {
                Directive::Public
            });
        }

        Ok(ResolvedControls {
            etag: self.etag.clone(),
            last_modified,
            expires,
            directives,
        })
    }
}

/// A single mutation of the `Cache-Control` directive list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Add `public`, drop `private`.
    Public,
    /// Add `private`, drop `public`.
    Private,
    /// Add a valueless directive.
    Set(&'static str),
    /// Drop a directive.
    Remove(&'static str),
    /// Set a directive to a number of seconds, replacing any previous value.
    Seconds(&'static str, u64),
}

impl Directive {
    /// `public`
    pub const PUBLIC: &'static str = "public";
    /// `private`
    pub const PRIVATE: &'static str = "private";
    /// `max-age`
    pub const MAX_AGE: &'static str = "max-age";
    /// `s-maxage`
    pub const S_MAXAGE: &'static str = "s-maxage";
    /// `stale-while-revalidate`
    pub const STALE_WHILE_REVALIDATE: &'static str = "stale-while-revalidate";
    /// `stale-if-error`
    pub const STALE_IF_ERROR: &'static str = "stale-if-error";
    /// `must-revalidate`
    pub const MUST_REVALIDATE: &'static str = "must-revalidate";
    /// `proxy-revalidate`
    pub const PROXY_REVALIDATE: &'static str = "proxy-revalidate";
    /// `no-cache`
    pub const NO_CACHE: &'static str = "no-cache";
    /// `no-store`
    pub const NO_STORE: &'static str = "no-store";
    /// `no-transform`
    pub const NO_TRANSFORM: &'static str = "no-transform";
    /// `immutable`
    pub const IMMUTABLE: &'static str = "immutable";
}

/// Cache controls ready to be written to a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedControls {
    /// Entity tag as configured.
    pub etag: Option<String>,
    /// Parsed `Last-Modified` instant.
    pub last_modified: Option<DateTime<Utc>>,
    /// Parsed `Expires` instant.
    pub expires: Option<DateTime<Utc>>,
    /// `Cache-Control` mutations, in application order.
    pub directives: Vec<Directive>,
}

/// Parses a configured date string into a UTC timestamp.
///
/// Accepts RFC 3339 (`2024-01-15T10:00:00Z`), RFC 2822 / HTTP dates
/// (`Mon, 15 Jan 2024 10:00:00 GMT`), offset-less date-times and bare dates.
/// Values without an offset are taken as UTC.
///
/// `field` names the directive in the returned error.
pub fn parse_date(field: &'static str, value: &str) -> Result<DateTime<Utc>, Error> {
    let trimmed = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Some(date) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(date.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| NaiveDateTime::from(date).and_utc())
        .map_err(|source| Error::InvalidDate {
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_rfc3339() {
        assert_eq!(
            parse_date("last_modified", "2024-01-15T10:00:00Z").unwrap(),
            instant()
        );
        assert_eq!(
            parse_date("last_modified", "2024-01-15T12:00:00+02:00").unwrap(),
            instant()
        );
    }

    #[test]
    fn test_parse_http_date() {
        assert_eq!(
            parse_date("last_modified", "Mon, 15 Jan 2024 10:00:00 GMT").unwrap(),
            instant()
        );
    }

    #[test]
    fn test_parse_naive_formats() {
        assert_eq!(
            parse_date("last_modified", "2024-01-15 10:00:00").unwrap(),
            instant()
        );
        assert_eq!(
            parse_date("expires", "2024-01-15").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = parse_date("last_modified", "not-a-date").unwrap_err();
        match err {
            Error::InvalidDate { field, value, .. } => {
                assert_eq!(field, "last_modified");
                assert_eq!(value, "not-a-date");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_controls() {
        assert!(CacheControls::new().is_empty());
        assert!(!CacheControls::new().no_store(false).is_empty());
    }

    #[test]
    fn test_resolve_orders_directives() {
        let resolved = CacheControls::new()
            .private(true)
            .must_revalidate(true)
            .no_transform(false)
            .max_age(60)
            .last_modified("2024-01-15T10:00:00Z")
            .resolve()
            .unwrap();

        assert_eq!(resolved.last_modified, Some(instant()));
        assert_eq!(resolved.expires, None);
        assert_eq!(
            resolved.directives,
            vec![
                Directive::Seconds(Directive::MAX_AGE, 60),
                Directive::Set(Directive::MUST_REVALIDATE),
                Directive::Remove(Directive::NO_TRANSFORM),
                Directive::Private,
            ]
        );
    }

    #[test]
    fn test_shared_max_age_implies_public_unless_overridden() {
        let implied = CacheControls::new().s_maxage(30).resolve().unwrap();
        assert_eq!(
            implied.directives,
            vec![
                Directive::Public,
                Directive::Seconds(Directive::S_MAXAGE, 30)
            ]
        );

        let overridden = CacheControls::new()
            .s_maxage(30)
            .public(false)
            .resolve()
            .unwrap();
        assert_eq!(overridden.directives.last(), Some(&Directive::Private));
    }

    #[test]
    fn test_resolve_rejects_invalid_expires() {
        let err = CacheControls::new().expires("soon").resolve().unwrap_err();
        assert!(matches!(err, Error::InvalidDate { field: "expires", .. }));
    }
}
