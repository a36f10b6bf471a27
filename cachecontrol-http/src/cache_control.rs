//! Parsed `Cache-Control` header value.

use std::fmt;

use cachecontrol_core::Directive;
use http::HeaderMap;
use http::header::CACHE_CONTROL;

/// Ordered list of `Cache-Control` directives.
///
/// Directive names are lowercased. Unknown directives are kept verbatim so
/// that applying rules never drops what the application already set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheControlValue {
    directives: Vec<(String, Option<String>)>,
}

impl CacheControlValue {
    /// Parses every `Cache-Control` header of `headers`.
    ///
    /// Values that are not visible ASCII are skipped.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut value = Self::default();
        for header in headers.get_all(CACHE_CONTROL) {
            if let Ok(header) = header.to_str() {
                value.extend_from_str(header);
            }
        }
        value
    }

    /// Parses a single header value.
    pub fn parse(header: &str) -> Self {
        let mut value = Self::default();
        value.extend_from_str(header);
        value
    }

    fn extend_from_str(&mut self, header: &str) {
        for directive in split_directives(header)
            .into_iter()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            // Only the name is case-insensitive; quoted arguments are kept verbatim.
            let (name, argument) = match directive.split_once('=') {
                Some((name, argument)) => (name.trim(), Some(argument.trim().to_string())),
                None => (directive, None),
            };
            self.put(&name.to_ascii_lowercase(), argument);
        }
    }

    /// Returns `true` if `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.directives.iter().any(|(n, _)| n == name)
    }

    /// Argument of `name`, if present and valued.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.directives
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, argument)| argument.as_deref())
    }

    /// Returns `true` if there are no directives.
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Applies one mutation.
    pub fn apply(&mut self, directive: &Directive) {
        match *directive {
            Directive::Public => {
                self.remove(Directive::PRIVATE);
                self.put(Directive::PUBLIC, None);
            }
            Directive::Private => {
                self.remove(Directive::PUBLIC);
                self.put(Directive::PRIVATE, None);
            }
            Directive::Set(name) => self.put(name, None),
            Directive::Remove(name) => self.remove(name),
            Directive::Seconds(name, seconds) => self.put(name, Some(seconds.to_string())),
        }
    }

    /// Inserts `name` or replaces its argument in place.
    fn put(&mut self, name: &str, argument: Option<String>) {
        match self.directives.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = argument,
            None => self.directives.push((name.to_string(), argument)),
        }
    }

    fn remove(&mut self, name: &str) {
        self.directives.retain(|(n, _)| n != name);
    }
}

/// Splits a header value on the commas that are not inside a quoted string.
fn split_directives(header: &str) -> Vec<&str> {
    let mut directives = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    let mut escaped = false;

    for (index, c) in header.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            ',' if !quoted => {
                directives.push(&header[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    directives.push(&header[start..]);
    directives
}

impl fmt::Display for CacheControlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, argument)) in self.directives.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            match argument {
                Some(argument) => write!(f, "{name}={argument}")?,
                None => f.write_str(name)?,
            }
        }
        Ok(())
    }
}
