//! Form submission handlers
//!
//! The site stores nothing: a valid submission is logged and acknowledged,
//! matching the original stub behavior. Validation is the only gate.

use axum::extract::{Path, State};
use axum::response::Html;
use serde::Deserialize;
use tracing::debug;

use super::pages::{apply, contact};
use crate::state::AppState;
use crate::utils::errors::Result;
use crate::utils::helpers::{is_valid_email, is_valid_phone, normalize_whitespace, truncate_text};
use crate::utils::logging::{log_application_submission, log_contact_submission};

/// Contact form fields
#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    fn is_valid(&self) -> bool {
        !normalize_whitespace(&self.name).is_empty()
            && is_valid_email(&self.email)
            && !normalize_whitespace(&self.message).is_empty()
    }
}

/// POST /{locale}/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    axum::Form(submission): axum::Form<ContactSubmission>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;

    if !submission.is_valid() {
        debug!(locale = %locale, "Contact form rejected by validation");
        let flash = contact::FormFlash::Error(contact::error_message(dictionary));
        return contact::render(&state, &locale, Some(flash));
    }

    log_contact_submission(&locale, &submission.name, &submission.email);
    debug!(
        preview = %truncate_text(&submission.message, 120),
        "Contact message received"
    );
    let flash = contact::FormFlash::Success(contact::success_message(dictionary));
    contact::render(&state, &locale, Some(flash))
}

/// Interpreter application form fields
#[derive(Debug, Deserialize)]
pub struct ApplicationSubmission {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub additional: String,
}

impl ApplicationSubmission {
    fn is_valid(&self) -> bool {
        let phone_ok = self.phone.trim().is_empty() || is_valid_phone(&self.phone);
        !normalize_whitespace(&self.full_name).is_empty()
            && is_valid_email(&self.email)
            && !normalize_whitespace(&self.languages).is_empty()
            && phone_ok
    }
}

/// POST /{locale}/apply
pub async fn submit_application(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    axum::Form(submission): axum::Form<ApplicationSubmission>,
) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(&locale)?;

    if !submission.is_valid() {
        debug!(locale = %locale, "Application form rejected by validation");
        let message = apply::error_message(dictionary);
        return apply::render(&state, &locale, None, Some(message));
    }

    log_application_submission(
        &locale,
        &submission.full_name,
        &submission.email,
        &submission.service_type,
    );
    let message = apply::success_message(dictionary);
    apply::render(&state, &locale, Some(message), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_submission_validation() {
        let valid = ContactSubmission {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            message: "Hello".to_string(),
        };
        assert!(valid.is_valid());

        let blank_name = ContactSubmission {
            name: "   ".to_string(),
            email: "maria@example.com".to_string(),
            message: "Hello".to_string(),
        };
        assert!(!blank_name.is_valid());

        let bad_email = ContactSubmission {
            name: "Maria".to_string(),
            email: "not-an-email".to_string(),
            message: "Hello".to_string(),
        };
        assert!(!bad_email.is_valid());
    }

    #[test]
    fn test_application_submission_validation() {
        let valid = ApplicationSubmission {
            full_name: "David Chen".to_string(),
            email: "david@example.com".to_string(),
            languages: "English, Mandarin".to_string(),
            ..blank()
        };
        assert!(valid.is_valid());

        let missing_languages = ApplicationSubmission {
            full_name: "David Chen".to_string(),
            email: "david@example.com".to_string(),
            ..blank()
        };
        assert!(!missing_languages.is_valid());

        let bad_phone = ApplicationSubmission {
            full_name: "David Chen".to_string(),
            email: "david@example.com".to_string(),
            languages: "English, Mandarin".to_string(),
            phone: "call me".to_string(),
            ..blank()
        };
        assert!(!bad_phone.is_valid());
    }

    fn blank() -> ApplicationSubmission {
        ApplicationSubmission {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            languages: String::new(),
            experience: String::new(),
            service_type: String::new(),
            specialization: String::new(),
            additional: String::new(),
        }
    }
}
