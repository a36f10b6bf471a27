//! End-to-end annotation of `http` responses.

use cachecontrol_core::{CacheControls, CacheOptions, Error, MatcherExt};
use cachecontrol_http::matchers::{Method, Path};
use cachecontrol_http::{HttpRuleSet, ResponseExt};
use http::header::{CACHE_CONTROL, LAST_MODIFIED, VARY};
use http::request::Parts;
use http::{Request, Response};
use pretty_assertions::assert_eq;

fn request(uri: &str) -> Parts {
    Request::get(uri).body(()).unwrap().into_parts().0
}

fn rules() -> HttpRuleSet {
    HttpRuleSet::builder()
        .add(
            Path::new("/api/{tail}*"),
            CacheOptions::new()
                .controls(CacheControls::new().public(true).max_age(60))
                .varnish_ttl(120),
        )
        .add_any(CacheOptions::new().controls(CacheControls::new().private(true)))
        .build()
}

#[test]
fn api_requests_are_public_with_ttl() {
    let mut response = Response::new(());

    let annotation = rules()
        .annotate(&request("/api/items"), &mut response.cache_headers())
        .unwrap();

    assert_eq!(annotation.rule, Some(0));
    assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=60");
    assert_eq!(response.headers()["x-varnish-ttl"], "120");
    assert_eq!(response.headers()[VARY], "Cookie");
}

#[test]
fn other_requests_fall_back_to_private() {
    let mut response = Response::new(());

    let annotation = rules()
        .annotate(&request("/home"), &mut response.cache_headers())
        .unwrap();

    assert_eq!(annotation.rule, Some(1));
    assert_eq!(response.headers()[CACHE_CONTROL], "private");
    assert!(response.headers().get("x-varnish-ttl").is_none());
    assert_eq!(response.headers()[VARY], "Cookie");
}

#[test]
fn unmatched_request_only_gets_vary() {
    let rules = HttpRuleSet::builder()
        .add(
            Method::new(http::Method::GET).and(Path::new("/static/{tail}*")),
            CacheOptions::new().varnish_ttl(3600),
        )
        .build();
    let mut response = Response::builder()
        .header(VARY, "Accept-Encoding")
        .body(())
        .unwrap();

    rules
        .annotate(&request("/home"), &mut response.cache_headers())
        .unwrap();

    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert!(response.headers().get("x-varnish-ttl").is_none());
    assert_eq!(response.headers()[VARY], "Accept-Encoding, Cookie");
}

#[test]
fn repeated_annotation_is_stable() {
    let rules = rules();
    let request = request("/api/items");
    let mut response = Response::builder()
        .header(VARY, "Accept-Encoding")
        .body(())
        .unwrap();

    rules.annotate(&request, &mut response.cache_headers()).unwrap();
    let second = rules.annotate(&request, &mut response.cache_headers()).unwrap();

    assert!(!second.vary_updated);
    assert!(!second.ttl_applied);
    assert_eq!(response.headers()[VARY], "Accept-Encoding, Cookie");
    assert_eq!(response.headers().get_all("x-varnish-ttl").iter().count(), 1);
    assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=60");
}

#[test]
fn existing_ttl_header_is_preserved() {
    let rules = HttpRuleSet::builder()
        .add_any(CacheOptions::new().varnish_ttl(600))
        .build();
    let mut response = Response::builder()
        .header("X-Varnish-TTL", "30")
        .body(())
        .unwrap();

    rules.annotate(&request("/"), &mut response.cache_headers()).unwrap();

    assert_eq!(response.headers()["x-varnish-ttl"], "30");
}

#[test]
fn last_modified_is_written_as_http_date() {
    let rules = HttpRuleSet::builder()
        .add_any(CacheOptions::new().controls(
            CacheControls::new()
                .last_modified("2024-01-15T10:00:00Z")
                .must_revalidate(true),
        ))
        .build();
    let mut response = Response::new(());

    rules.annotate(&request("/"), &mut response.cache_headers()).unwrap();

    assert_eq!(
        response.headers()[LAST_MODIFIED],
        "Mon, 15 Jan 2024 10:00:00 GMT"
    );
    assert_eq!(response.headers()[CACHE_CONTROL], "must-revalidate");
}

#[test]
fn invalid_last_modified_fails_the_matching_request() {
    let rules = HttpRuleSet::builder()
        .add(
            Path::new("/broken"),
            CacheOptions::new().controls(CacheControls::new().last_modified("not-a-date")),
        )
        .build();

    let mut broken = Response::new(());
    let err = rules
        .annotate(&request("/broken"), &mut broken.cache_headers())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDate { field: "last_modified", .. }));

    let mut other = Response::new(());
    rules
        .annotate(&request("/other"), &mut other.cache_headers())
        .unwrap();
    assert_eq!(other.headers()[VARY], "Cookie");
}

#[test]
fn response_parts_can_be_annotated() {
    let (mut parts, body) = Response::new("body").into_parts();

    rules()
        .annotate(&request("/api/items"), &mut parts.cache_headers())
        .unwrap();

    let response = Response::from_parts(parts, body);
    assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=60");
}

#[test]
fn quoted_cache_control_arguments_survive_annotation() {
    let rules = HttpRuleSet::builder()
        .add_any(CacheOptions::new().controls(CacheControls::new().max_age(60)))
        .build();
    let mut response = Response::builder()
        .header(CACHE_CONTROL, r#"no-cache="Set-Cookie, X-Foo""#)
        .body(())
        .unwrap();

    rules.annotate(&request("/"), &mut response.cache_headers()).unwrap();

    assert_eq!(
        response.headers()[CACHE_CONTROL],
        r#"no-cache="Set-Cookie, X-Foo", max-age=60"#
    );
}
