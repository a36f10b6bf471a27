//! [`CacheHeaders`] on top of `http` header maps.
//!
//! Validators are written as single header fields, `Cache-Control` is
//! merged with what the application already set, and `Vary` is rewritten as
//! one comma-separated field.

use cachecontrol_core::{CacheHeaders, Error, ResolvedControls};
use chrono::{DateTime, Utc};
use http::header::{CACHE_CONTROL, ETAG, EXPIRES, HeaderName, HeaderValue, LAST_MODIFIED, VARY};
use http::{HeaderMap, Response, response};
use tracing::trace;

use crate::cache_control::CacheControlValue;

/// [`CacheHeaders`] view over a response's header map.
#[derive(Debug)]
pub struct ResponseHeaders<'a> {
    headers: &'a mut HeaderMap,
}

impl<'a> ResponseHeaders<'a> {
    /// Wraps a header map.
    pub fn new(headers: &'a mut HeaderMap) -> Self {
        Self { headers }
    }
}

/// Access to [`ResponseHeaders`] from response types.
pub trait ResponseExt {
    /// Borrows the response headers for annotation.
    fn cache_headers(&mut self) -> ResponseHeaders<'_>;
}

impl<B> ResponseExt for Response<B> {
    fn cache_headers(&mut self) -> ResponseHeaders<'_> {
        ResponseHeaders::new(self.headers_mut())
    }
}

impl ResponseExt for response::Parts {
    fn cache_headers(&mut self) -> ResponseHeaders<'_> {
        ResponseHeaders::new(&mut self.headers)
    }
}

impl ResponseExt for HeaderMap {
    fn cache_headers(&mut self) -> ResponseHeaders<'_> {
        ResponseHeaders::new(self)
    }
}

impl CacheHeaders for ResponseHeaders<'_> {
    fn set_cache(&mut self, controls: &ResolvedControls) -> Result<(), Error> {
        if let Some(etag) = &controls.etag {
            self.headers
                .insert(ETAG, header_value(ETAG.as_str(), &quote_etag(etag))?);
        }
        if let Some(last_modified) = controls.last_modified {
            self.headers.insert(
                LAST_MODIFIED,
                header_value(LAST_MODIFIED.as_str(), &http_date(last_modified))?,
            );
        }
        if let Some(expires) = controls.expires {
            self.headers
                .insert(EXPIRES, header_value(EXPIRES.as_str(), &http_date(expires))?);
        }

        if controls.directives.is_empty() {
            return Ok(());
        }

        let mut cache_control = CacheControlValue::from_headers(self.headers);
        for directive in &controls.directives {
            cache_control.apply(directive);
        }

        if cache_control.is_empty() {
            self.headers.remove(CACHE_CONTROL);
        } else {
            let rendered = cache_control.to_string();
            trace!(cache_control = %rendered, "cache-control rewritten");
            self.headers.insert(
                CACHE_CONTROL,
                header_value(CACHE_CONTROL.as_str(), &rendered)?,
            );
        }
        Ok(())
    }

    fn add_header(&mut self, name: &str, value: &str) -> Result<bool, Error> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| Error::InvalidHeaderValue {
                name: name.to_string(),
                value: value.to_string(),
            })?;
        let header_value = header_value(name, value)?;

        if self
            .headers
            .get_all(&header_name)
            .iter()
            .any(|existing| *existing == header_value)
        {
            return Ok(false);
        }
        self.headers.append(header_name, header_value);
        Ok(true)
    }

    fn vary(&self) -> Vec<String> {
        self.headers
            .get_all(VARY)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Replaces the readable `Vary` fields with one joined field.
    ///
    /// Fields that are not visible ASCII cannot be listed by [`vary`] and are
    /// appended back unchanged.
    ///
    /// [`vary`]: CacheHeaders::vary
    fn set_vary(&mut self, vary: &[String]) -> Result<(), Error> {
        let joined = (!vary.is_empty())
            .then(|| header_value(VARY.as_str(), &vary.join(", ")))
            .transpose()?;
        let opaque: Vec<HeaderValue> = self
            .headers
            .get_all(VARY)
            .iter()
            .filter(|value| value.to_str().is_err())
            .cloned()
            .collect();

        self.headers.remove(VARY);
        if let Some(joined) = joined {
            self.headers.insert(VARY, joined);
        }
        for value in opaque {
            self.headers.append(VARY, value);
        }
        Ok(())
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|_| Error::InvalidHeaderValue {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// IMF-fixdate, the preferred HTTP date format.
fn http_date(date: DateTime<Utc>) -> String {
    date.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn quote_etag(etag: &str) -> String {
    if etag.starts_with('"') || etag.starts_with("W/\"") {
        etag.to_string()
    } else {
        format!("\"{etag}\"")
    }
}
