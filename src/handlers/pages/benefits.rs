//! Employee benefits page handler
//!
//! Renders the optional `employeeBenefits` dictionary section. This page
//! carries the largest default content table: a bundle that omits the
//! section entirely still renders the full English page.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::PageChrome;
use crate::i18n::Dictionary;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const PAGE_TITLE: &str = "Comprehensive Employee Benefits";
    pub const PAGE_SUBTITLE: &str =
        "Attract and retain top talent with competitive benefits packages that include health, retirement, and wellness solutions.";
    pub const OVERVIEW_TITLE: &str = "Enhance Your Employee Experience";
    pub const OVERVIEW_DESCRIPTION: &str =
        "Our customizable benefits packages help you create a workplace where employees feel valued, supported, and motivated to perform at their best.";
    pub const EXPLORE_BUTTON: &str = "Explore Benefits Solutions";
    pub const STRATEGIC_TITLE: &str = "Strategic Benefits Solutions";
    pub const STRATEGIC_DESCRIPTION_1: &str =
        "In today's competitive job market, a comprehensive benefits package is more than just a perk. It is a strategic necessity for attracting and retaining top talent.";
    pub const STRATEGIC_DESCRIPTION_2: &str =
        "Our customizable employee benefits solutions help you create a workplace where your team feels valued, supported, and motivated to perform at their best.";
    pub const EMPLOYEES_COVERED: &str = "Employees covered";
    pub const CORPORATE_CLIENTS: &str = "Corporate clients";
    pub const SOLUTIONS_TITLE: &str = "Our Benefits Solutions";
    pub const KEY_FEATURES: &str = "Key Features:";
    pub const LEARN_MORE: &str = "Learn More";
    pub const CTA_TITLE: &str = "Elevate Your Employee Benefits Today";
    pub const CTA_DESCRIPTION: &str =
        "Contact us to learn how our customizable employee benefits solutions, including wellness programs, can help you attract and retain top talent.";
    pub const REQUEST_CONSULTATION: &str = "Request a Consultation";

    pub const HEALTH_TITLE: &str = "Comprehensive Health Insurance";
    pub const HEALTH_DESCRIPTION: &str =
        "Top-tier health plans that keep your employees and their families protected with minimal out-of-pocket expenses.";
    pub const HEALTH_FEATURES: [&str; 4] = [
        "Medical, dental, and vision coverage",
        "Low deductibles and copays",
        "Prescription drug benefits",
        "Telehealth services included",
    ];

    pub const RETIREMENT_TITLE: &str = "Retirement & Financial Planning";
    pub const RETIREMENT_DESCRIPTION: &str =
        "Help employees secure their future with competitive retirement plans and financial wellness resources.";
    pub const RETIREMENT_FEATURES: [&str; 4] = [
        "401(k) with employer matching",
        "Financial planning resources",
        "Investment education",
        "Retirement readiness workshops",
    ];

    pub const PROFESSIONAL_TITLE: &str = "Professional Development";
    pub const PROFESSIONAL_DESCRIPTION: &str =
        "Invest in your employees' growth with education benefits and career advancement opportunities.";
    pub const PROFESSIONAL_FEATURES: [&str; 4] = [
        "Tuition reimbursement",
        "Professional certification support",
        "Mentorship programs",
        "Conference and workshop stipends",
    ];

    pub const WELLNESS_TITLE: &str = "Wellness Programs";
    pub const WELLNESS_DESCRIPTION: &str =
        "Empower employees to lead healthier lives with our comprehensive wellness platform.";
    pub const WELLNESS_FEATURES: [&str; 4] = [
        "Guided meditation and yoga sessions",
        "Fitness and flexibility training",
        "Mental health resources",
        "Stress management techniques",
    ];
}

/// One benefits program card
pub struct BenefitProgramModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

/// Employee benefits page template
#[derive(Template)]
#[template(path = "benefits.html")]
pub struct BenefitsTemplate {
    pub chrome: PageChrome,
    pub page_title: String,
    pub page_subtitle: String,
    pub overview_title: String,
    pub overview_description: String,
    pub explore_button: String,
    pub strategic_title: String,
    pub strategic_description_1: String,
    pub strategic_description_2: String,
    pub employees_covered: String,
    pub corporate_clients: String,
    pub solutions_title: String,
    pub key_features: String,
    pub learn_more: String,
    pub cta_title: String,
    pub cta_description: String,
    pub request_consultation: String,
    pub programs: Vec<BenefitProgramModel>,
}

fn program(
    dictionary: &Dictionary,
    id: &str,
    title_default: &str,
    description_default: &str,
    feature_defaults: &[&str],
) -> BenefitProgramModel {
    BenefitProgramModel {
        id: id.to_string(),
        title: dictionary.text(&format!("employeeBenefits.{}.title", id), title_default),
        description: dictionary.text(
            &format!("employeeBenefits.{}.description", id),
            description_default,
        ),
        features: dictionary.list(
            &format!("employeeBenefits.{}.features", id),
            feature_defaults,
        ),
    }
}

/// GET /{locale}/benefits
pub async fn show(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;
    let t = |path: &str, default: &str| dictionary.text(&format!("employeeBenefits.{}", path), default);

    let page_title = t("pageTitle", defaults::PAGE_TITLE);
    let programs = vec![
        program(
            dictionary,
            "health",
            defaults::HEALTH_TITLE,
            defaults::HEALTH_DESCRIPTION,
            &defaults::HEALTH_FEATURES,
        ),
        program(
            dictionary,
            "retirement",
            defaults::RETIREMENT_TITLE,
            defaults::RETIREMENT_DESCRIPTION,
            &defaults::RETIREMENT_FEATURES,
        ),
        program(
            dictionary,
            "professional",
            defaults::PROFESSIONAL_TITLE,
            defaults::PROFESSIONAL_DESCRIPTION,
            &defaults::PROFESSIONAL_FEATURES,
        ),
        program(
            dictionary,
            "wellness",
            defaults::WELLNESS_TITLE,
            defaults::WELLNESS_DESCRIPTION,
            &defaults::WELLNESS_FEATURES,
        ),
    ];

    let template = BenefitsTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            &locale,
            "benefits",
            &page_title,
        ),
        page_title,
        page_subtitle: t("pageSubtitle", defaults::PAGE_SUBTITLE),
        overview_title: t("overviewTitle", defaults::OVERVIEW_TITLE),
        overview_description: t("overviewDescription", defaults::OVERVIEW_DESCRIPTION),
        explore_button: t("exploreButton", defaults::EXPLORE_BUTTON),
        strategic_title: t("strategicTitle", defaults::STRATEGIC_TITLE),
        strategic_description_1: t("strategicDescription1", defaults::STRATEGIC_DESCRIPTION_1),
        strategic_description_2: t("strategicDescription2", defaults::STRATEGIC_DESCRIPTION_2),
        employees_covered: t("employeesCovered", defaults::EMPLOYEES_COVERED),
        corporate_clients: t("corporateClients", defaults::CORPORATE_CLIENTS),
        solutions_title: t("solutionsTitle", defaults::SOLUTIONS_TITLE),
        key_features: t("keyFeatures", defaults::KEY_FEATURES),
        learn_more: t("learnMore", defaults::LEARN_MORE),
        cta_title: t("ctaTitle", defaults::CTA_TITLE),
        cta_description: t("ctaDescription", defaults::CTA_DESCRIPTION),
        request_consultation: t("requestConsultation", defaults::REQUEST_CONSULTATION),
        programs,
    };
    Ok(Html(template.render()?))
}
