//! Internationalization module
//!
//! This module handles multi-language support for the E-Voque website.
//! It provides dictionary bundle loading, per-slot fallback resolution,
//! and locale helpers shared by the page chrome.

pub mod loader;

pub use loader::{Dictionary, DictionaryStats, DictionaryStore, LocaleStats};

/// Human-readable language name for a locale code
pub fn language_name(locale: &str) -> String {
    match locale {
        "en" => "English".to_string(),
        "es" => "Español".to_string(),
        _ => locale.to_uppercase(),
    }
}

/// Rewrite a locale-prefixed path to point at another locale.
///
/// The first path segment is replaced wholesale, matching the language
/// switcher behavior: "/en/services" with "es" becomes "/es/services".
pub fn switch_locale_path(path: &str, locale: &str) -> String {
    let mut parts: Vec<&str> = path.split('/').collect();
    if parts.len() > 1 {
        parts[1] = locale;
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_name_known_locales() {
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("es"), "Español");
    }

    #[test]
    fn test_language_name_unknown_locale_uppercased() {
        assert_eq!(language_name("pt"), "PT");
    }

    #[test]
    fn test_switch_locale_path_replaces_first_segment() {
        assert_eq!(switch_locale_path("/en/services", "es"), "/es/services");
        assert_eq!(switch_locale_path("/es", "en"), "/en");
    }

    #[test]
    fn test_switch_locale_path_keeps_deeper_segments() {
        assert_eq!(switch_locale_path("/en/about", "es"), "/es/about");
    }
}
