//! About page handler

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::PageChrome;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const TITLE: &str = "About E-Voque";
    pub const DESCRIPTION: &str =
        "A leading provider of over-the-phone interpretation services connecting businesses and individuals with professional interpreters.";
    pub const MISSION: &str =
        "Our mission is to break down language barriers and connect people through professional interpretation services.";
}

/// About page template
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub chrome: PageChrome,
    pub title: String,
    pub description: String,
    pub mission: String,
}

/// GET /{locale}/about
pub async fn show(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;

    let title = dictionary.text("about.title", defaults::TITLE);
    let template = AboutTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            &locale,
            "about",
            &title,
        ),
        title,
        description: dictionary.text("about.description", defaults::DESCRIPTION),
        mission: dictionary.text("about.mission", defaults::MISSION),
    };
    Ok(Html(template.render()?))
}
