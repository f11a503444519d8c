//! Locale routing middleware
//!
//! This module ensures every served page URL carries an explicit, supported
//! locale segment. Requests without one are redirected to the default
//! locale; build assets and API routes pass through untouched.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use crate::state::AppState;

/// Path prefixes that bypass locale routing entirely
const PASSTHROUGH_PREFIXES: [&str; 2] = ["/api/", "/static/"];

/// Outcome of a locale routing decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The path already targets a locale-prefixed page or a non-page resource
    PassThrough,
    /// The path must be redirected to a locale-prefixed URL
    Redirect(String),
}

/// Decide whether a request path needs a locale-prefix redirect.
///
/// The first path segment is split out explicitly and compared for equality
/// against the supported locale set. Any non-match — including segments that
/// merely look like locales — is treated uniformly as "no locale present",
/// and the default locale is prepended. The query string is preserved
/// verbatim on redirects. One deterministic decision per request, no state.
pub fn resolve_path(
    path: &str,
    query: Option<&str>,
    supported_locales: &[String],
    default_locale: &str,
) -> RouteDecision {
    if path == "/favicon.ico" || PASSTHROUGH_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return RouteDecision::PassThrough;
    }

    if path == "/" {
        return RouteDecision::Redirect(with_query(format!("/{}", default_locale), query));
    }

    let first_segment = path.trim_start_matches('/').split('/').next().unwrap_or("");
    if supported_locales.iter().any(|l| l == first_segment) {
        return RouteDecision::PassThrough;
    }

    RouteDecision::Redirect(with_query(format!("/{}{}", default_locale, path), query))
}

fn with_query(path: String, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path,
    }
}

/// Axum middleware applying [`resolve_path`] to every incoming request
pub async fn locale_redirect(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let decision = resolve_path(
        request.uri().path(),
        request.uri().query(),
        state.dictionaries.supported_locales(),
        state.dictionaries.default_locale(),
    );

    match decision {
        RouteDecision::PassThrough => next.run(request).await,
        RouteDecision::Redirect(location) => {
            debug!(
                path = %request.uri().path(),
                location = %location,
                "Redirecting to locale-prefixed URL"
            );
            Redirect::temporary(&location).into_response()
        }
    }
}
