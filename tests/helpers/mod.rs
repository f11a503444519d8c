//! Shared helpers for integration tests
//!
//! Builds the application router against either the repository's real
//! translation bundles or custom in-test bundles written to a temp dir.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use evoque_web::config::Settings;
use evoque_web::handlers;
use evoque_web::i18n::DictionaryStore;
use evoque_web::state::AppState;

/// Router backed by the repository's translations/ directory
pub async fn test_router() -> Router {
    let settings = Settings::default();
    let mut dictionaries = DictionaryStore::new(&settings.i18n);
    dictionaries
        .load()
        .await
        .expect("failed to load repository translations");
    handlers::router(AppState::new(settings, dictionaries))
}

/// Router backed by custom bundles. `es` may be omitted to simulate a
/// locale with no dictionary file at all.
pub async fn router_with_bundles(en: &Value, es: Option<&Value>) -> Router {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(dir.path().join("en.json"), en.to_string()).expect("failed to write en.json");
    if let Some(es) = es {
        std::fs::write(dir.path().join("es.json"), es.to_string())
            .expect("failed to write es.json");
    }

    let mut settings = Settings::default();
    settings.i18n.translations_dir = dir.path().to_string_lossy().to_string();

    let mut dictionaries = DictionaryStore::new(&settings.i18n);
    dictionaries
        .load()
        .await
        .expect("failed to load test translations");
    handlers::router(AppState::new(settings, dictionaries))
}

/// Minimal bundle satisfying the required top-level sections
pub fn minimal_bundle() -> Value {
    json!({
        "nav": {},
        "hero": {},
        "about": {},
        "services": {
            "medical": { "title": "Medical", "description": "Medical interpretation" },
            "legal": { "title": "Legal", "description": "Legal interpretation" },
            "business": { "title": "Business", "description": "Business interpretation" },
            "emergency": { "title": "Emergency", "description": "Emergency interpretation" }
        },
        "benefits": {},
        "contact": { "form": {} },
        "footer": {}
    })
}

/// Issue a GET request against the router
pub async fn get(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

/// Issue a form POST request against the router
pub async fn post_form(router: Router, uri: &str, body: &str) -> Response<Body> {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed")
}

/// Collect a response body to a string
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body was not UTF-8")
}

/// Location header of a redirect response
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("missing location header")
        .to_str()
        .expect("location header was not UTF-8")
}

/// Assert a response is a locale redirect to the expected location
pub fn assert_redirect(response: &Response<Body>, expected: &str) {
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(response), expected);
}
