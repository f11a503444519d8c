//! Locale routing integration tests
//!
//! Drives the full router through the locale middleware: redirects for
//! unprefixed paths, passthrough for locale-prefixed pages and assets, and
//! not-found outcomes for unsupported locales.

mod helpers;

use axum::http::{header, StatusCode};
use helpers::*;

const PAGES: [&str; 9] = [
    "about",
    "services",
    "benefits",
    "wellness",
    "requirements",
    "apply",
    "contact",
    "privacy",
    "terms",
];

#[tokio::test]
async fn test_root_redirects_to_default_locale() {
    let response = get(test_router().await, "/").await;
    assert_redirect(&response, "/en");
}

#[tokio::test]
async fn test_unprefixed_page_redirects_to_default_locale() {
    let response = get(test_router().await, "/about").await;
    assert_redirect(&response, "/en/about");
}

#[tokio::test]
async fn test_redirect_preserves_query_string() {
    let response = get(test_router().await, "/about?ref=ad&utm=x").await;
    assert_redirect(&response, "/en/about?ref=ad&utm=x");

    let response = get(test_router().await, "/?ref=ad").await;
    assert_redirect(&response, "/en?ref=ad");
}

#[tokio::test]
async fn test_locale_prefixed_page_serves_without_redirect() {
    let response = get(test_router().await, "/en/about").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Idempotence: the same request again is still a direct 200, no loop
    let response = get(test_router().await, "/en/about").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_every_locale_and_page_serves_directly() {
    for locale in ["en", "es"] {
        let response = get(test_router().await, &format!("/{}", locale)).await;
        assert_eq!(response.status(), StatusCode::OK, "home page for {}", locale);

        for page in PAGES {
            let uri = format!("/{}/{}", locale, page);
            let response = get(test_router().await, &uri).await;
            assert_eq!(response.status(), StatusCode::OK, "page {}", uri);
        }
    }
}

#[tokio::test]
async fn test_unsupported_locale_segment_gets_prefixed_then_not_found() {
    // "fr" is not in the supported set, so it is treated as a page path
    let response = get(test_router().await, "/fr/about").await;
    assert_redirect(&response, "/en/fr/about");

    // Following the redirect lands on no known route
    let response = get(test_router().await, "/en/fr/about").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_page_under_valid_locale_is_not_found() {
    let response = get(test_router().await, "/en/careers").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_and_assets_pass_through_without_redirect() {
    let response = get(test_router().await, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"status\":\"ok\""));

    let response = get(test_router().await, "/static/site.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"));

    // favicon has no route, but it must 404 directly, never redirect
    let response = get(test_router().await, "/favicon.ico").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_contact_form_submission_round_trip() {
    let response = post_form(
        test_router().await,
        "/en/contact",
        "name=Maria&email=maria%40example.com&message=Hello",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Thank you for your message"));

    let response = post_form(
        test_router().await,
        "/en/contact",
        "name=&email=bad&message=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Please fill in all required fields"));
}

#[tokio::test]
async fn test_application_form_localized_confirmation() {
    let response = post_form(
        test_router().await,
        "/es/apply",
        "full_name=David+Chen&email=david%40example.com&languages=Ingl%C3%A9s%2C+Mandar%C3%ADn",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Gracias por postularte"));
}
