//! Interpreter requirements page handler
//!
//! Renders the optional `requirements` dictionary section: six requirement
//! categories with detail lists and the five-step application process.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::PageChrome;
use crate::i18n::Dictionary;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const PAGE_TITLE: &str = "Interpreter Requirements";
    pub const PAGE_SUBTITLE: &str =
        "Learn about what it takes to become a part of our global network of professional interpreters and translators.";
    pub const OVERVIEW_TITLE: &str = "Join Our Elite Team of Interpreters";
    pub const OVERVIEW_DESCRIPTION: &str =
        "We maintain high standards to ensure the best quality interpretation services for our clients.";
    pub const PROCESS_TITLE: &str = "Application Process";
    pub const CTA_TITLE: &str = "Ready to Apply?";
    pub const CTA_DESCRIPTION: &str =
        "If you meet our requirements and are passionate about connecting people across languages, we want to hear from you!";
    pub const APPLY_NOW: &str = "Apply Now";

    pub struct RequirementDefault {
        pub id: &'static str,
        pub title: &'static str,
        pub description: &'static str,
        pub details: [&'static str; 4],
    }

    pub const REQUIREMENTS: [RequirementDefault; 6] = [
        RequirementDefault {
            id: "languageProficiency",
            title: "Language Proficiency",
            description: "Fluency in at least two languages is required. You must be able to speak, read, and write with native or near-native proficiency in your working languages.",
            details: [
                "Native or near-native fluency in your primary languages",
                "Strong comprehension of dialects and idioms",
                "Excellent accent and pronunciation",
                "Ability to switch between languages smoothly",
            ],
        },
        RequirementDefault {
            id: "education",
            title: "Education & Certification",
            description: "Formal education or certification in interpretation/translation is highly preferred, but equivalent experience may be considered.",
            details: [
                "Degree in translation, interpretation, or linguistics (preferred)",
                "Professional certification from recognized bodies",
                "Specialized training in medical, legal, or technical fields",
                "Continuing education in language skills",
            ],
        },
        RequirementDefault {
            id: "experience",
            title: "Professional Experience",
            description: "Prior experience in interpretation or translation services is required, with preference given to those with specialized industry experience.",
            details: [
                "Minimum 1-2 years of professional interpretation experience",
                "Experience in over-the-phone or video interpretation",
                "Industry-specific experience (medical, legal, business)",
                "Client-facing communication skills",
            ],
        },
        RequirementDefault {
            id: "technical",
            title: "Technical Requirements",
            description: "Our remote interpreters need reliable equipment and a suitable work environment to deliver quality service.",
            details: [
                "Reliable computer with updated operating system",
                "High-speed internet connection (minimum 25 Mbps)",
                "Professional headset with noise-cancellation",
                "Quiet, private workspace free from distractions",
            ],
        },
        RequirementDefault {
            id: "availability",
            title: "Availability & Flexibility",
            description: "We serve clients 24/7 and value interpreters who can offer flexible scheduling options.",
            details: [
                "Ability to commit to regular weekly hours",
                "Preference for those available during high-demand times",
                "Reliability in adhering to scheduled shifts",
                "Responsiveness to urgent interpretation needs",
            ],
        },
        RequirementDefault {
            id: "legal",
            title: "Legal Requirements",
            description: "All interpreters must meet specific legal requirements to work with our platform.",
            details: [
                "Legal authorization to work in your country of residence",
                "Ability to pass background checks where required",
                "Willingness to sign confidentiality agreements",
                "Compliance with data protection regulations",
            ],
        },
    ];

    pub const PROCESS_STEPS: [(&str, &str, &str); 5] = [
        (
            "submitApplication",
            "Submit Your Application",
            "Complete our online application form with your personal information, language skills, education, and professional experience.",
        ),
        (
            "initialScreening",
            "Initial Screening",
            "Our recruitment team will review your application and contact you for an initial phone screening if your qualifications match our needs.",
        ),
        (
            "languageAssessment",
            "Language Assessment",
            "Demonstrate your language proficiency through a structured assessment with one of our senior interpreters.",
        ),
        (
            "interview",
            "Interview & Background Check",
            "Meet with our team to discuss your experience and complete any required background verification.",
        ),
        (
            "onboarding",
            "Onboarding & Training",
            "Complete our platform training and start taking interpretation calls with ongoing support.",
        ),
    ];
}

/// One interpreter requirement with its detail list
pub struct RequirementModel {
    pub title: String,
    pub description: String,
    pub details: Vec<String>,
}

/// One application process step
pub struct ProcessStepModel {
    pub number: usize,
    pub title: String,
    pub description: String,
}

/// Requirements page template
#[derive(Template)]
#[template(path = "requirements.html")]
pub struct RequirementsTemplate {
    pub chrome: PageChrome,
    pub page_title: String,
    pub page_subtitle: String,
    pub overview_title: String,
    pub overview_description: String,
    pub process_title: String,
    pub cta_title: String,
    pub cta_description: String,
    pub apply_now: String,
    pub requirements: Vec<RequirementModel>,
    pub steps: Vec<ProcessStepModel>,
}

fn build_requirements(dictionary: &Dictionary) -> Vec<RequirementModel> {
    defaults::REQUIREMENTS
        .iter()
        .map(|req| {
            let base = format!("requirements.requirements.{}", req.id);
            RequirementModel {
                title: dictionary.text(&format!("{}.title", base), req.title),
                description: dictionary.text(&format!("{}.description", base), req.description),
                details: dictionary.list(&format!("{}.details", base), &req.details),
            }
        })
        .collect()
}

fn build_steps(dictionary: &Dictionary) -> Vec<ProcessStepModel> {
    defaults::PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(index, (id, title, description))| {
            let base = format!("requirements.applicationProcess.steps.{}", id);
            ProcessStepModel {
                number: index + 1,
                title: dictionary.text(&format!("{}.title", base), title),
                description: dictionary.text(&format!("{}.description", base), description),
            }
        })
        .collect()
}

/// GET /{locale}/requirements
pub async fn show(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;
    let t = |path: &str, default: &str| dictionary.text(&format!("requirements.{}", path), default);

    let page_title = t("pageTitle", defaults::PAGE_TITLE);
    let template = RequirementsTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            &locale,
            "requirements",
            &page_title,
        ),
        page_title,
        page_subtitle: t("pageSubtitle", defaults::PAGE_SUBTITLE),
        overview_title: t("overviewTitle", defaults::OVERVIEW_TITLE),
        overview_description: t("overviewDescription", defaults::OVERVIEW_DESCRIPTION),
        process_title: t("applicationProcess.title", defaults::PROCESS_TITLE),
        cta_title: t("ctaTitle", defaults::CTA_TITLE),
        cta_description: t("ctaDescription", defaults::CTA_DESCRIPTION),
        apply_now: t("applyNow", defaults::APPLY_NOW),
        requirements: build_requirements(dictionary),
        steps: build_steps(dictionary),
    };
    Ok(Html(template.render()?))
}
