//! Contact page handler
//!
//! Renders the contact section and form. The same view model backs the
//! contact section embedded on the home page.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use super::PageChrome;
use crate::i18n::Dictionary;
use crate::state::AppState;
use crate::utils::errors::Result;

mod defaults {
    pub const TITLE: &str = "Contact Us";
    pub const DESCRIPTION: &str =
        "Have questions about our interpretation services? Reach out and our team will get back to you soon.";
    pub const PHONE: &str = "Phone";
    pub const EMAIL: &str = "Email";
    pub const ADDRESS: &str = "Address";
    pub const ADDRESS_VALUE: &str = "123 Interpretation St, San Francisco, CA 94105";
    pub const FORM_NAME: &str = "Name";
    pub const FORM_EMAIL: &str = "Email";
    pub const FORM_MESSAGE: &str = "Message";
    pub const FORM_SUBMIT: &str = "Send Message";
    pub const FORM_SUCCESS: &str = "Thank you for your message! We will get back to you soon.";
    pub const FORM_ERROR: &str = "Please fill in all required fields with a valid email address.";
}

/// Contact form labels
pub struct ContactFormModel {
    pub name: String,
    pub email: String,
    pub message: String,
    pub submit: String,
}

/// Contact section content, shared by the contact page and the home page
pub struct ContactModel {
    pub title: String,
    pub description: String,
    pub phone_label: String,
    pub phone_value: String,
    pub email_label: String,
    pub email_value: String,
    pub address_label: String,
    pub address_value: String,
    pub form: ContactFormModel,
}

impl ContactModel {
    /// Resolve every contact slot against the dictionary
    pub fn build(state: &AppState, dictionary: &Dictionary) -> Self {
        Self {
            title: dictionary.text("contact.title", defaults::TITLE),
            description: dictionary.text("contact.description", defaults::DESCRIPTION),
            phone_label: dictionary.text("contact.phone", defaults::PHONE),
            phone_value: state.settings.site.contact_phone.clone(),
            email_label: dictionary.text("contact.email", defaults::EMAIL),
            email_value: state.settings.site.contact_email.clone(),
            address_label: dictionary.text("contact.address", defaults::ADDRESS),
            address_value: defaults::ADDRESS_VALUE.to_string(),
            form: ContactFormModel {
                name: dictionary.text("contact.form.name", defaults::FORM_NAME),
                email: dictionary.text("contact.form.email", defaults::FORM_EMAIL),
                message: dictionary.text("contact.form.message", defaults::FORM_MESSAGE),
                submit: dictionary.text("contact.form.submit", defaults::FORM_SUBMIT),
            },
        }
    }
}

/// Localized outcome banner shown after a form submission
pub enum FormFlash {
    Success(String),
    Error(String),
}

/// Contact page template
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub chrome: PageChrome,
    pub contact: ContactModel,
    pub flash_success: Option<String>,
    pub flash_error: Option<String>,
}

/// Render the contact page, optionally with a submission outcome banner
pub fn render(state: &AppState, locale: &str, flash: Option<FormFlash>) -> Result<Html<String>> {
    let dictionary = state.dictionaries.get(locale)?;
    let contact = ContactModel::build(state, dictionary);
    let (flash_success, flash_error) = match flash {
        Some(FormFlash::Success(msg)) => (Some(msg), None),
        Some(FormFlash::Error(msg)) => (None, Some(msg)),
        None => (None, None),
    };
    let template = ContactTemplate {
        chrome: PageChrome::build(
            &state.settings,
            &state.dictionaries,
            dictionary,
            locale,
            "contact",
            &contact.title,
        ),
        contact,
        flash_success,
        flash_error,
    };
    Ok(Html(template.render()?))
}

/// Localized success message for a completed submission
pub fn success_message(dictionary: &Dictionary) -> String {
    dictionary.text("contact.form.success", defaults::FORM_SUCCESS)
}

/// Localized error message for a rejected submission
pub fn error_message(dictionary: &Dictionary) -> String {
    dictionary.text("contact.form.error", defaults::FORM_ERROR)
}

/// GET /{locale}/contact
pub async fn show(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> Result<Html<String>> {
    render(&state, &locale, None)
}
