use cachecontrol_configuration::{Config, ConfigError, Matcher, RuleConfig};
use cachecontrol_configuration::matchers::{MethodOperation, PathOperation};
use cachecontrol_core::CacheControls;
use cachecontrol_http::{HttpRuleSet, ResponseExt};
use http::header::{CACHE_CONTROL, LAST_MODIFIED, VARY};
use http::{Request, Response};
use pretty_assertions::assert_eq;

fn annotate(rules: &HttpRuleSet, request: Request<()>) -> Response<()> {
    let (parts, ()) = request.into_parts();
    let mut response = Response::new(());
    rules
        .annotate(&parts, &mut response.cache_headers())
        .expect("annotation failed");
    response
}

#[test]
fn test_deserialize_rules() {
    let yaml = r#"
rules:
  - match:
      - Path: "/api/{tail}*"
      - Method: [GET, HEAD]
    controls:
      public: true
      max_age: 60
    varnish_ttl: 120
  - controls:
      private: true
"#;

    let config = Config::from_yaml(yaml).expect("failed to deserialize");

    assert_eq!(
        config,
        Config {
            rules: vec![
                RuleConfig {
                    matchers: vec![
                        Matcher::Path(PathOperation::Pattern("/api/{tail}*".to_string())),
                        Matcher::Method(MethodOperation::In(vec![
                            "GET".to_string(),
                            "HEAD".to_string()
                        ])),
                    ],
                    controls: CacheControls::new().public(true).max_age(60),
                    varnish_ttl: Some(120),
                },
                RuleConfig {
                    matchers: vec![],
                    controls: CacheControls::new().private(true),
                    varnish_ttl: None,
                },
            ],
        }
    );
}

#[test]
fn test_loaded_rules_annotate_responses() {
    let yaml = r#"
rules:
  - match:
      - Path: "/api/{tail}*"
    controls:
      public: true
      max_age: 60
      last_modified: "2024-01-01 12:00:00"
    varnish_ttl: 120
  - controls:
      private: true
"#;
    let rules = Config::from_yaml(yaml)
        .and_then(Config::into_rule_set)
        .expect("failed to load");
    assert_eq!(rules.len(), 2);

    let api = annotate(&rules, Request::get("/api/items").body(()).unwrap());
    assert_eq!(api.headers()[CACHE_CONTROL], "public, max-age=60");
    assert_eq!(api.headers()[LAST_MODIFIED], "Mon, 01 Jan 2024 12:00:00 GMT");
    assert_eq!(api.headers()["x-varnish-ttl"], "120");
    assert_eq!(api.headers()[VARY], "Cookie");

    let page = annotate(&rules, Request::get("/about").body(()).unwrap());
    assert_eq!(page.headers()[CACHE_CONTROL], "private");
    assert!(page.headers().get("x-varnish-ttl").is_none());
}

#[test]
fn test_empty_document_has_no_rules() {
    let rules = Config::from_yaml("rules: []")
        .and_then(Config::into_rule_set)
        .expect("failed to load");
    assert!(rules.is_empty());

    let response = annotate(&rules, Request::get("/").body(()).unwrap());
    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert_eq!(response.headers()[VARY], "Cookie");
}

#[test]
fn test_unknown_control_is_rejected() {
    let yaml = r#"
rules:
  - controls:
      maxage: 60
"#;
    let error = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(error, ConfigError::Yaml(_)), "got {error:?}");
}

#[test]
fn test_invalid_date_fails_at_load() {
    let yaml = r#"
rules:
  - controls:
      public: true
  - controls:
      last_modified: "yesterday-ish"
"#;
    let config = Config::from_yaml(yaml).expect("failed to deserialize");
    let error = config.into_rule_set().unwrap_err();
    assert!(
        matches!(error, ConfigError::InvalidRule { index: 1, .. }),
        "got {error:?}"
    );
}

#[test]
fn test_empty_path_list_is_rejected() {
    let yaml = r#"
rules:
  - match:
      - Path:
          in: []
"#;
    let error = Config::from_yaml(yaml)
        .and_then(Config::into_rule_set)
        .unwrap_err();
    assert!(matches!(error, ConfigError::EmptyPathList), "got {error:?}");
}

#[test]
fn test_invalid_method_is_rejected() {
    let yaml = r#"
rules:
  - match:
      - Method: "G E T"
"#;
    let error = Config::from_yaml(yaml)
        .and_then(Config::into_rule_set)
        .unwrap_err();
    assert!(
        matches!(error, ConfigError::InvalidMethod(ref name, _) if name == "G E T"),
        "got {error:?}"
    );
}

#[test]
fn test_header_and_host_matchers() {
    let yaml = r#"
rules:
  - match:
      - Host: '^api\.example\.com$'
      - Header:
          X-Api-Key:
            exist: true
          Accept: ["application/json", "application/xml"]
    controls:
      public: true
      s_maxage: 300
  - controls:
      no_store: true
"#;
    let rules = Config::from_yaml(yaml)
        .and_then(Config::into_rule_set)
        .expect("failed to load");

    let matching = Request::get("http://api.example.com/v1")
        .header("x-api-key", "secret")
        .header("accept", "application/json")
        .body(())
        .unwrap();
    assert_eq!(rules.position(&matching.into_parts().0), Some(0));

    let wrong_host = Request::get("http://www.example.com/v1")
        .header("x-api-key", "secret")
        .header("accept", "application/json")
        .body(())
        .unwrap();
    assert_eq!(rules.position(&wrong_host.into_parts().0), Some(1));

    let missing_key = Request::get("http://api.example.com/v1")
        .header("accept", "application/json")
        .body(())
        .unwrap();
    let response = annotate(&rules, missing_key);
    assert_eq!(response.headers()[CACHE_CONTROL], "no-store");
}

#[test]
fn test_invalid_header_regex_is_rejected() {
    let yaml = r#"
rules:
  - match:
      - Header:
          User-Agent:
            regex: "(unclosed"
"#;
    let error = Config::from_yaml(yaml)
        .and_then(Config::into_rule_set)
        .unwrap_err();
    assert!(
        matches!(error, ConfigError::InvalidRegex { ref pattern, .. } if pattern == "(unclosed"),
        "got {error:?}"
    );
}

#[test]
fn test_malformed_path_pattern_is_rejected() {
    let yaml = r#"
rules:
  - match:
      - Path: "/api/{unclosed"
"#;
    let error = Config::from_yaml(yaml)
        .and_then(Config::into_rule_set)
        .unwrap_err();
    assert!(
        matches!(error, ConfigError::InvalidPath(ref invalid) if invalid.pattern() == "/api/{unclosed"),
        "got {error:?}"
    );
}

#[test]
fn test_malformed_pattern_in_path_list_is_rejected() {
    let yaml = r#"
rules:
  - match:
      - Path:
          in: ["/ok", "/users/{id:[0-9}"]
"#;
    let error = Config::from_yaml(yaml)
        .and_then(Config::into_rule_set)
        .unwrap_err();
    assert!(matches!(error, ConfigError::InvalidPath(_)), "got {error:?}");
}
