//! Request handlers and router construction
//!
//! This module wires the page handlers, form handlers, and non-page routes
//! into the axum router and applies the locale and logging middleware.

pub mod forms;
pub mod pages;

use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use crate::middleware::{locale_redirect, request_logging};
use crate::state::AppState;
use crate::utils::errors::SiteError;

/// Embedded stylesheet served at /static/site.css
const STYLESHEET: &str = include_str!("../../static/site.css");

/// Build the application router with middleware applied
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/static/site.css", get(stylesheet))
        .route("/{locale}", get(pages::home::show))
        .route("/{locale}/about", get(pages::about::show))
        .route("/{locale}/services", get(pages::services::show))
        .route("/{locale}/benefits", get(pages::benefits::show))
        .route("/{locale}/wellness", get(pages::wellness::show))
        .route("/{locale}/requirements", get(pages::requirements::show))
        .route(
            "/{locale}/apply",
            get(pages::apply::show).post(forms::submit_application),
        )
        .route(
            "/{locale}/contact",
            get(pages::contact::show).post(forms::submit_contact),
        )
        .route("/{locale}/privacy", get(pages::legal::privacy))
        .route("/{locale}/terms", get(pages::legal::terms))
        .fallback(not_found)
        .layer(
            tower::ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_logging))
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    locale_redirect,
                )),
        )
        .with_state(state)
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /static/site.css
async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

/// Standalone not-found page, also used for post-redirect junk paths
#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {}

/// Fallback handler for unmatched routes
async fn not_found() -> Response {
    match (NotFoundTemplate {}).render() {
        Ok(body) => (StatusCode::NOT_FOUND, Html(body)).into_response(),
        Err(e) => SiteError::Template(e).into_response(),
    }
}
