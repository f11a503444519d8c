//! Apply page handler
//!
//! Renders the optional `apply` dictionary section: the interpreter
//! application form with its labels, the benefits programs for applicants,
//! and the FAQ. Form submission is handled in `handlers::forms`.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::PageChrome;
use crate::i18n::Dictionary;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const PAGE_TITLE: &str = "Join Our Team of Experts";
    pub const PAGE_SUBTITLE: &str =
        "Apply today to become part of our global network of professional interpreters and translators.";
    pub const BENEFITS_TITLE: &str = "Why Join E-Voque";
    pub const FORM_TITLE: &str = "Application Form";
    pub const FORM_DESCRIPTION: &str =
        "Tell us about yourself and your language skills. Our recruitment team reviews every application.";
    pub const PERSONAL_INFO_TITLE: &str = "Personal Information";
    pub const FULL_NAME: &str = "Full Name";
    pub const EMAIL: &str = "Email";
    pub const PHONE: &str = "Phone";
    pub const LOCATION: &str = "Location";
    pub const PROFESSIONAL_INFO_TITLE: &str = "Professional Information";
    pub const LANGUAGES: &str = "Languages (native and working)";
    pub const EXPERIENCE: &str = "Years of Experience";
    pub const SERVICE_TYPE: &str = "Service Type";
    pub const SPECIALIZATION: &str = "Specialization";
    pub const ADDITIONAL_INFO: &str = "Additional Information";
    pub const ADDITIONAL_PLACEHOLDER: &str =
        "Tell us anything else that makes you a great fit.";
    pub const SUBMIT_BUTTON: &str = "Submit Application";
    pub const TERMS_AGREEMENT: &str =
        "By submitting this form, you agree to our terms of service and privacy policy.";
    pub const FAQ_TITLE: &str = "Frequently Asked Questions";
    pub const FORM_SUCCESS: &str =
        "Thank you for applying! Our recruitment team will review your application and be in touch.";
    pub const FORM_ERROR: &str =
        "Please complete all required fields with a valid email address.";

    pub const PROGRAMS: [(&str, &str, &str); 5] = [
        (
            "compensation",
            "Competitive Compensation",
            "Earn top rates based on your skills and experience. We offer some of the most competitive pay in the industry.",
        ),
        (
            "health",
            "Health & Wellness",
            "We care about your wellbeing. Take advantage of our health benefits designed for remote professionals.",
        ),
        (
            "flexibility",
            "Flexible Scheduling",
            "Work when it suits you. Our platform allows you to set your availability and take control of your work-life balance.",
        ),
        (
            "development",
            "Professional Development",
            "Grow your skills and advance your career with our training and certification opportunities.",
        ),
        (
            "office",
            "Remote Office Access",
            "Access to our premium coworking space when you want a change of scenery.",
        ),
    ];

    pub const FAQ: [(&str, &str, &str); 4] = [
        (
            "question1",
            "What languages are you currently hiring for?",
            "We are always looking for interpreters in Spanish, Mandarin, Vietnamese, Arabic, and many other languages. Demand shifts, so apply even if your language is not listed.",
        ),
        (
            "question2",
            "Do I need to live in a specific location?",
            "No. Our interpreters work remotely from around the world. You only need a reliable internet connection and a quiet workspace.",
        ),
        (
            "question3",
            "How long does the application process take?",
            "Most applicants complete screening, assessment, and onboarding within two to three weeks.",
        ),
        (
            "question4",
            "Is certification required to apply?",
            "Certification is preferred for medical and legal interpretation but equivalent professional experience is considered.",
        ),
    ];
}

/// One applicant benefit program card
pub struct ApplyProgramModel {
    pub title: String,
    pub description: String,
}

/// One FAQ entry
pub struct FaqItemModel {
    pub question: String,
    pub answer: String,
}

/// Form field labels resolved from the dictionary
pub struct ApplyFormLabels {
    pub form_title: String,
    pub form_description: String,
    pub personal_info_title: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub professional_info_title: String,
    pub languages: String,
    pub experience: String,
    pub service_type: String,
    pub specialization: String,
    pub additional_info: String,
    pub additional_placeholder: String,
    pub submit_button: String,
    pub terms_agreement: String,
}

/// Apply page template
#[derive(Template)]
#[template(path = "apply.html")]
pub struct ApplyTemplate {
    pub chrome: PageChrome,
    pub page_title: String,
    pub page_subtitle: String,
    pub benefits_title: String,
    pub programs: Vec<ApplyProgramModel>,
    pub labels: ApplyFormLabels,
    pub faq_title: String,
    pub faq: Vec<FaqItemModel>,
    pub flash_success: Option<String>,
    pub flash_error: Option<String>,
}

fn build_labels(dictionary: &Dictionary) -> ApplyFormLabels {
    let t = |path: &str, default: &str| dictionary.text(&format!("apply.{}", path), default);
    ApplyFormLabels {
        form_title: t("formTitle", defaults::FORM_TITLE),
        form_description: t("formDescription", defaults::FORM_DESCRIPTION),
        personal_info_title: t("personalInfo.title", defaults::PERSONAL_INFO_TITLE),
        full_name: t("personalInfo.fullName", defaults::FULL_NAME),
        email: t("personalInfo.email", defaults::EMAIL),
        phone: t("personalInfo.phone", defaults::PHONE),
        location: t("personalInfo.location", defaults::LOCATION),
        professional_info_title: t("professionalInfo.title", defaults::PROFESSIONAL_INFO_TITLE),
        languages: t("professionalInfo.languages", defaults::LANGUAGES),
        experience: t("professionalInfo.experience", defaults::EXPERIENCE),
        service_type: t("professionalInfo.serviceType", defaults::SERVICE_TYPE),
        specialization: t("professionalInfo.specialization", defaults::SPECIALIZATION),
        additional_info: t("additionalInfo", defaults::ADDITIONAL_INFO),
        additional_placeholder: t("additionalPlaceholder", defaults::ADDITIONAL_PLACEHOLDER),
        submit_button: t("submitButton", defaults::SUBMIT_BUTTON),
        terms_agreement: t("termsAgreement", defaults::TERMS_AGREEMENT),
    }
}

/// Render the apply page, optionally with a submission outcome banner
pub fn render(
    state: &AppState,
    locale: &str,
    flash_success: Option<String>,
    flash_error: Option<String>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(locale)?;
    let t = |path: &str, default: &str| dictionary.text(&format!("apply.{}", path), default);

    let page_title = t("pageTitle", defaults::PAGE_TITLE);
    let programs = defaults::PROGRAMS
        .iter()
        .map(|(id, title, description)| ApplyProgramModel {
            title: t(&format!("benefitsPrograms.{}.title", id), title),
            description: t(&format!("benefitsPrograms.{}.description", id), description),
        })
        .collect();
    let faq = defaults::FAQ
        .iter()
        .map(|(id, question, answer)| FaqItemModel {
            question: t(&format!("faq.{}.title", id), question),
            answer: t(&format!("faq.{}.answer", id), answer),
        })
        .collect();

    let template = ApplyTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            locale,
            "apply",
            &page_title,
        ),
        page_title,
        page_subtitle: t("pageSubtitle", defaults::PAGE_SUBTITLE),
        benefits_title: t("benefitsTitle", defaults::BENEFITS_TITLE),
        programs,
        labels: build_labels(dictionary),
        faq_title: t("faq.title", defaults::FAQ_TITLE),
        faq,
        flash_success,
        flash_error,
    };
    Ok(Html(template.render()?))
}

/// Localized success message for a completed application
pub fn success_message(dictionary: &Dictionary) -> String {
    dictionary.text("apply.formSuccess", defaults::FORM_SUCCESS)
}

/// Localized error message for a rejected application
pub fn error_message(dictionary: &Dictionary) -> String {
    dictionary.text("apply.formError", defaults::FORM_ERROR)
}

/// GET /{locale}/apply
pub async fn show(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    render(&state, &locale, None, None)
}
