//! Host name matcher.

use cachecontrol_core::RequestMatcher;
use http::header::HOST;
use http::request::Parts;
use regex::Regex;

/// A matcher accepting requests whose host matches a regular expression.
///
/// The host is taken from the request URI authority when present (HTTP/2,
/// absolute-form requests) and from the `Host` header otherwise. The port is
/// not part of the matched value.
#[derive(Debug, Clone)]
pub struct Host {
    pattern: Regex,
}

impl Host {
    /// Creates a host matcher from a compiled pattern.
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Compiles `pattern` and creates a host matcher.
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::new(Regex::new(pattern)?))
    }
}

fn request_host(request: &Parts) -> Option<&str> {
    if let Some(host) = request.uri.host() {
        return Some(host);
    }
    let header = request.headers.get(HOST)?.to_str().ok()?;
    // Bracketed IPv6 literals keep their colons.
    match header.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            Some(host)
        }
        _ => Some(header),
    }
}

impl RequestMatcher for Host {
    type Subject = Parts;

    fn matches(&self, request: &Parts) -> bool {
        request_host(request).is_some_and(|host| self.pattern.is_match(host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_host_header(host: &str) -> Parts {
        http::Request::get("/")
            .header(HOST, host)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_host_header_without_port() {
        let matcher = Host::parse(r"^(www\.)?example\.com$").unwrap();
        assert!(matcher.matches(&with_host_header("example.com:8080")));
        assert!(matcher.matches(&with_host_header("www.example.com")));
        assert!(!matcher.matches(&with_host_header("api.example.org")));
    }

    #[test]
    fn test_uri_authority_wins() {
        let matcher = Host::parse(r"^cdn\.").unwrap();
        let (parts, ()) = http::Request::get("https://cdn.example.com/app.js")
            .header(HOST, "origin.example.com")
            .body(())
            .unwrap()
            .into_parts();
        assert!(matcher.matches(&parts));
    }

    #[test]
    fn test_missing_host_never_matches() {
        let matcher = Host::parse(".*").unwrap();
        let (parts, ()) = http::Request::get("/").body(()).unwrap().into_parts();
        assert!(!matcher.matches(&parts));
    }
}
