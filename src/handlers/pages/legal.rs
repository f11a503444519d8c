//! Privacy policy and terms of service pages
//!
//! Legal copy is static template content; titles come from the footer
//! labels so they follow the visitor's locale.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::PageChrome;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const PRIVACY_TITLE: &str = "Privacy Policy";
    pub const TERMS_TITLE: &str = "Terms of Service";
}

/// Privacy policy template
#[derive(Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub chrome: PageChrome,
    pub title: String,
}

/// Terms of service template
#[derive(Template)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    pub chrome: PageChrome,
    pub title: String,
}

/// GET /{locale}/privacy
pub async fn privacy(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;
    let title = dictionary.text("footer.privacy", defaults::PRIVACY_TITLE);
    let template = PrivacyTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            &locale,
            "privacy",
            &title,
        ),
        title,
    };
    Ok(Html(template.render()?))
}

/// GET /{locale}/terms
pub async fn terms(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;
    let title = dictionary.text("footer.terms", defaults::TERMS_TITLE);
    let template = TermsTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            &locale,
            "terms",
            &title,
        ),
        title,
    };
    Ok(Html(template.render()?))
}
