//! Services page handler
//!
//! Renders the four core service categories from the dictionary, each with
//! a feature list resolved through the same fallback utility.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::PageChrome;
use crate::i18n::Dictionary;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const PAGE_TITLE: &str = "Our Interpretation Services";
    pub const PAGE_SUBTITLE: &str =
        "Professional interpretation services to break down language barriers and facilitate clear communication.";

    pub const MEDICAL_TITLE: &str = "Medical Interpretation";
    pub const MEDICAL_DESCRIPTION: &str =
        "Accurate interpretation for healthcare settings, from routine appointments to emergency care.";
    pub const MEDICAL_FEATURES: [&str; 4] = [
        "Immediate access to medical interpreters",
        "HIPAA-compliant interpretation services",
        "Specialized medical terminology knowledge",
        "24/7 availability for emergency situations",
    ];

    pub const LEGAL_TITLE: &str = "Legal Interpretation";
    pub const LEGAL_DESCRIPTION: &str =
        "Precise interpretation for courts, law firms, and legal proceedings of every kind.";
    pub const LEGAL_FEATURES: [&str; 4] = [
        "Court-certified interpreters",
        "Deposition and witness interview support",
        "Legal document translation capabilities",
        "Confidentiality agreements for sensitive cases",
    ];

    pub const BUSINESS_TITLE: &str = "Business Interpretation";
    pub const BUSINESS_DESCRIPTION: &str =
        "Seamless communication for international meetings, negotiations, and conferences.";
    pub const BUSINESS_FEATURES: [&str; 4] = [
        "International business meeting facilitation",
        "Sales and negotiation interpretation",
        "Technical terminology expertise",
        "Multi-party conference call support",
    ];

    pub const EMERGENCY_TITLE: &str = "Emergency Services";
    pub const EMERGENCY_DESCRIPTION: &str =
        "Immediate interpretation support when every second counts.";
    pub const EMERGENCY_FEATURES: [&str; 4] = [
        "Immediate connection to interpreters",
        "Disaster response support",
        "Crisis management interpretation",
        "Priority handling for emergency situations",
    ];
}

/// One service category with its feature list
pub struct ServiceCategoryModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Services page template
#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub chrome: PageChrome,
    pub page_title: String,
    pub page_subtitle: String,
    pub categories: Vec<ServiceCategoryModel>,
}

fn category(
    dictionary: &Dictionary,
    id: &str,
    title_default: &str,
    description_default: &str,
    feature_defaults: &[&str],
) -> ServiceCategoryModel {
    ServiceCategoryModel {
        id: id.to_string(),
        title: dictionary.text(&format!("services.{}.title", id), title_default),
        description: dictionary.text(
            &format!("services.{}.description", id),
            description_default,
        ),
        features: dictionary.list(&format!("services.{}.features", id), feature_defaults),
    }
}

/// GET /{locale}/services
pub async fn show(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;

    let page_title = dictionary.text("services.title", defaults::PAGE_TITLE);
    let categories = vec![
        category(
            dictionary,
            "medical",
            defaults::MEDICAL_TITLE,
            defaults::MEDICAL_DESCRIPTION,
            &defaults::MEDICAL_FEATURES,
        ),
        category(
            dictionary,
            "legal",
            defaults::LEGAL_TITLE,
            defaults::LEGAL_DESCRIPTION,
            &defaults::LEGAL_FEATURES,
        ),
        category(
            dictionary,
            "business",
            defaults::BUSINESS_TITLE,
            defaults::BUSINESS_DESCRIPTION,
            &defaults::BUSINESS_FEATURES,
        ),
        category(
            dictionary,
            "emergency",
            defaults::EMERGENCY_TITLE,
            defaults::EMERGENCY_DESCRIPTION,
            &defaults::EMERGENCY_FEATURES,
        ),
    ];

    let template = ServicesTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            &locale,
            "services",
            &page_title,
        ),
        page_title,
        page_subtitle: defaults::PAGE_SUBTITLE.to_string(),
        categories,
    };
    Ok(Html(template.render()?))
}
