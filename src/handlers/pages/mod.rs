//! Page handlers
//!
//! One module per page. Every handler follows the same shape: validate the
//! locale, fetch the dictionary, resolve each content slot through the
//! per-slot fallback utility, render the askama template.

pub mod about;
pub mod apply;
pub mod benefits;
pub mod contact;
pub mod home;
pub mod legal;
pub mod requirements;
pub mod services;
pub mod wellness;

use chrono::{Datelike, Utc};

use crate::config::Settings;
use crate::i18n::{language_name, switch_locale_path, Dictionary, DictionaryStore};

mod defaults {
    pub const NAV_HOME: &str = "Home";
    pub const NAV_ABOUT: &str = "About Us";
    pub const NAV_SERVICES: &str = "Services";
    pub const NAV_WELLNESS: &str = "Wellness";
    pub const NAV_CONTACT: &str = "Contact";
    pub const FOOTER_RIGHTS: &str = "All rights reserved";
    pub const FOOTER_PRIVACY: &str = "Privacy Policy";
    pub const FOOTER_TERMS: &str = "Terms of Service";
}

/// Navigation bar labels
pub struct NavModel {
    pub home: String,
    pub about: String,
    pub services: String,
    pub wellness: String,
    pub contact: String,
}

/// Footer labels and the copyright year
pub struct FooterModel {
    pub year: i32,
    pub rights: String,
    pub privacy: String,
    pub terms: String,
}

/// One entry in the language switcher
pub struct LanguageOption {
    pub code: String,
    pub name: String,
    pub href: String,
    pub current: bool,
}

/// Shared chrome rendered on every page: navbar, footer, language switcher
pub struct PageChrome {
    pub site_name: String,
    pub locale: String,
    pub title: String,
    pub nav: NavModel,
    pub footer: FooterModel,
    pub languages: Vec<LanguageOption>,
}

impl PageChrome {
    /// Build the chrome for one page render.
    ///
    /// `page_path` is the path below the locale segment, empty for the home
    /// page; the language switcher swaps the locale segment of the current
    /// path so switching keeps the visitor on the same page.
    pub fn build(
        settings: &Settings,
        store: &DictionaryStore,
        dictionary: &Dictionary,
        locale: &str,
        page_path: &str,
        page_title: &str,
    ) -> Self {
        let current_path = if page_path.is_empty() {
            format!("/{}", locale)
        } else {
            format!("/{}/{}", locale, page_path)
        };

        let languages = store
            .supported_locales()
            .iter()
            .map(|code| LanguageOption {
                code: code.clone(),
                name: language_name(code),
                href: switch_locale_path(&current_path, code),
                current: code == locale,
            })
            .collect();

        Self {
            site_name: settings.site.name.clone(),
            locale: locale.to_string(),
            title: format!("{} | {}", settings.site.name, page_title),
            nav: NavModel {
                home: dictionary.text("nav.home", defaults::NAV_HOME),
                about: dictionary.text("nav.about", defaults::NAV_ABOUT),
                services: dictionary.text("nav.services", defaults::NAV_SERVICES),
                wellness: dictionary.text("nav.wellness", defaults::NAV_WELLNESS),
                contact: dictionary.text("nav.contact", defaults::NAV_CONTACT),
            },
            footer: FooterModel {
                year: Utc::now().year(),
                rights: dictionary.text("footer.rights", defaults::FOOTER_RIGHTS),
                privacy: dictionary.text("footer.privacy", defaults::FOOTER_PRIVACY),
                terms: dictionary.text("footer.terms", defaults::FOOTER_TERMS),
            },
            languages,
        }
    }
}
