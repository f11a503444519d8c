//! Wellness page handler
//!
//! Program content on this page is static template copy; only the chrome is
//! dictionary-driven.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::PageChrome;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const PAGE_TITLE: &str = "Wellness Programs";
}

/// Wellness page template
#[derive(Template)]
#[template(path = "wellness.html")]
pub struct WellnessTemplate {
    pub chrome: PageChrome,
}

/// GET /{locale}/wellness
pub async fn show(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;
    let template = WellnessTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            &locale,
            "wellness",
            defaults::PAGE_TITLE,
        ),
    };
    Ok(Html(template.render()?))
}
