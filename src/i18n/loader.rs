//! Dictionary loader and lookup
//!
//! This module provides the core internationalization functionality: loading
//! locale content bundles at startup, validating their structure, and
//! resolving nested content slots with per-slot fallback defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, error, info, warn};

use crate::config::I18nConfig;
use crate::utils::errors::{Result, SiteError};

/// Top-level sections every dictionary bundle must carry.
const REQUIRED_SECTIONS: [&str; 7] = [
    "nav", "hero", "about", "services", "benefits", "contact", "footer",
];

/// Content bundle for a single locale.
///
/// Structurally a tree of string keys; leaves are display strings or string
/// lists. Everything below the required top-level sections is optional, so
/// absent keys are an expected condition handled by [`Dictionary::text`] and
/// [`Dictionary::list`], never an error.
#[derive(Debug, Clone)]
pub struct Dictionary {
    root: Map<String, Value>,
}

impl Dictionary {
    /// Build a dictionary from a parsed JSON object, enforcing the required
    /// top-level structure.
    pub fn from_root(locale: &str, root: Map<String, Value>) -> Result<Self> {
        validate_bundle(locale, &root)?;
        Ok(Self { root })
    }

    /// Resolve a content slot by dotted path, falling back to `default` when
    /// the path is absent or not a string.
    ///
    /// This is the single merge point for dictionary content and hardcoded
    /// defaults: `dictionary.path ?? default`, evaluated independently per
    /// slot. A partially translated bundle therefore mixes translated and
    /// default-language strings within one section.
    pub fn text(&self, path: &str, default: &str) -> String {
        match self.value(path) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Resolve a string-list slot by dotted path, falling back to `defaults`
    /// when the path is absent or not an array.
    pub fn list(&self, path: &str, defaults: &[&str]) -> Vec<String> {
        match self.value(path) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => defaults.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Look up a raw value by dotted path, e.g. "services.medical.title".
    fn value(&self, path: &str) -> Option<&Value> {
        let mut keys = path.split('.');
        let mut current = self.root.get(keys.next()?)?;
        for key in keys {
            current = current.get(key)?;
        }
        Some(current)
    }

    /// Recursively count leaf entries in the bundle.
    fn key_count(&self) -> usize {
        count_keys(&self.root)
    }
}

fn count_keys(obj: &Map<String, Value>) -> usize {
    let mut count = 0;
    for value in obj.values() {
        match value {
            Value::Object(nested) => count += count_keys(nested),
            _ => count += 1,
        }
    }
    count
}

/// Check the required top-level shape of a bundle.
///
/// Only the top level is validated; everything deeper is optional and
/// resolved per slot at render time.
fn validate_bundle(locale: &str, root: &Map<String, Value>) -> Result<()> {
    for section in REQUIRED_SECTIONS {
        if !matches!(root.get(section), Some(Value::Object(_))) {
            return Err(SiteError::Config(format!(
                "Dictionary '{}' is missing required section '{}'",
                locale, section
            )));
        }
    }

    Ok(())
}

/// Process-wide dictionary table, built once at startup and shared read-only
/// across request tasks.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    dictionaries: HashMap<String, Dictionary>,
    default_locale: String,
    supported_locales: Vec<String>,
    translations_dir: PathBuf,
}

impl DictionaryStore {
    /// Create a new store without loading any bundles yet
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            dictionaries: HashMap::new(),
            default_locale: config.default_locale.clone(),
            supported_locales: config.supported_locales.clone(),
            translations_dir: PathBuf::from(&config.translations_dir),
        }
    }

    /// Load all dictionary bundles from the translations directory.
    ///
    /// A missing or invalid bundle for the default locale is fatal; other
    /// locales are logged and skipped so the site still serves with
    /// per-slot defaults.
    pub async fn load(&mut self) -> Result<()> {
        let supported_locales = self.supported_locales.clone();
        for locale in &supported_locales {
            let file_path = self.translations_dir.join(format!("{}.json", locale));

            if file_path.exists() {
                match self.load_locale_file(&file_path, locale).await {
                    Ok(_) => info!("Loaded dictionary for locale: {}", locale),
                    Err(e) => {
                        error!("Failed to load dictionary for {}: {}", locale, e);
                        if locale == &self.default_locale {
                            return Err(SiteError::Config(format!(
                                "Failed to load default locale dictionary: {}",
                                e
                            )));
                        }
                    }
                }
            } else {
                warn!("Dictionary file not found: {}", file_path.display());
                if locale == &self.default_locale {
                    return Err(SiteError::Config(format!(
                        "Default locale dictionary file not found: {}",
                        file_path.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Load and validate a single locale bundle
    async fn load_locale_file(&mut self, file_path: &Path, locale: &str) -> Result<()> {
        let content = fs::read_to_string(file_path).await?;
        let parsed: Value = serde_json::from_str(&content)?;

        match parsed {
            Value::Object(root) => {
                let dictionary = Dictionary::from_root(locale, root)?;
                debug!(
                    "Loaded {} content keys for {}",
                    dictionary.key_count(),
                    locale
                );
                self.dictionaries.insert(locale.to_string(), dictionary);
                Ok(())
            }
            _ => Err(SiteError::Config(format!(
                "Invalid dictionary file format for {}",
                locale
            ))),
        }
    }

    /// Look up the dictionary for a locale.
    ///
    /// Callers are expected to route only supported locales here; an
    /// unsupported locale is still rejected defensively rather than silently
    /// served with the default bundle.
    pub fn get(&self, locale: &str) -> Result<&Dictionary> {
        if !self.is_supported(locale) {
            return Err(SiteError::InvalidLocale {
                locale: locale.to_string(),
            });
        }
        self.dictionaries
            .get(locale)
            .ok_or_else(|| SiteError::MissingDictionary {
                locale: locale.to_string(),
            })
    }

    /// Check if a locale is in the supported set
    pub fn is_supported(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }

    /// Get supported locales
    pub fn supported_locales(&self) -> &[String] {
        &self.supported_locales
    }

    /// Get the default locale
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Get dictionary statistics for startup logging
    pub fn stats(&self) -> DictionaryStats {
        let mut stats = DictionaryStats {
            locales: Vec::new(),
            default_locale_keys: 0,
        };

        for (locale, dictionary) in &self.dictionaries {
            let key_count = dictionary.key_count();
            stats.locales.push(LocaleStats {
                code: locale.clone(),
                key_count,
            });
            if locale == &self.default_locale {
                stats.default_locale_keys = key_count;
            }
        }

        stats
    }
}

/// Dictionary statistics
#[derive(Debug, Clone)]
pub struct DictionaryStats {
    pub locales: Vec<LocaleStats>,
    pub default_locale_keys: usize,
}

/// Locale-specific statistics
#[derive(Debug, Clone)]
pub struct LocaleStats {
    pub code: String,
    pub key_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn minimal_root() -> Map<String, Value> {
        let value = json!({
            "nav": { "home": "Home" },
            "hero": { "title": "Breaking Barriers" },
            "about": { "title": "About Us" },
            "services": {
                "title": "Our Services",
                "medical": { "title": "Medical", "description": "Medical interpretation" },
                "legal": { "title": "Legal", "description": "Legal interpretation" },
                "business": { "title": "Business", "description": "Business interpretation" },
                "emergency": { "title": "Emergency", "description": "Emergency interpretation" }
            },
            "benefits": { "title": "Why Choose Us" },
            "contact": {
                "title": "Contact",
                "form": { "name": "Name", "email": "Email", "message": "Message", "submit": "Send" }
            },
            "footer": { "rights": "All rights reserved" }
        });
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_text_returns_translation_when_present() {
        let dict = Dictionary::from_root("en", minimal_root()).unwrap();
        assert_eq!(
            dict.text("services.medical.title", "fallback"),
            "Medical"
        );
    }

    #[test]
    fn test_text_falls_back_on_missing_path() {
        let dict = Dictionary::from_root("en", minimal_root()).unwrap();
        assert_eq!(
            dict.text("services.emergency.cta", "Call now"),
            "Call now"
        );
    }

    #[test]
    fn test_text_falls_back_on_non_string_value() {
        let dict = Dictionary::from_root("en", minimal_root()).unwrap();
        assert_eq!(dict.text("services", "fallback"), "fallback");
    }

    #[test]
    fn test_list_returns_defaults_when_absent() {
        let dict = Dictionary::from_root("en", minimal_root()).unwrap();
        let features = dict.list("employeeBenefits.health.features", &["Dental", "Vision"]);
        assert_eq!(features, vec!["Dental", "Vision"]);
    }

    #[test]
    fn test_list_returns_translated_entries() {
        let mut root = minimal_root();
        root.insert(
            "employeeBenefits".to_string(),
            json!({ "health": { "features": ["Cobertura dental", "Cobertura visual"] } }),
        );
        let dict = Dictionary::from_root("es", root).unwrap();
        let features = dict.list("employeeBenefits.health.features", &["Dental", "Vision"]);
        assert_eq!(features, vec!["Cobertura dental", "Cobertura visual"]);
    }

    #[test]
    fn test_missing_required_section_rejected() {
        let mut root = minimal_root();
        root.remove("footer");
        assert_matches!(
            Dictionary::from_root("en", root),
            Err(SiteError::Config(_))
        );
    }

    #[test]
    fn test_deep_fields_are_optional() {
        let mut root = minimal_root();
        root.insert(
            "services".to_string(),
            json!({
                "medical": { "title": "Medical", "description": "d" },
                "emergency": { "title": "Emergency" }
            }),
        );
        let dict = Dictionary::from_root("en", root).unwrap();
        assert_eq!(
            dict.text("services.emergency.description", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_store_rejects_unsupported_locale() {
        let config = I18nConfig {
            default_locale: "en".to_string(),
            supported_locales: vec!["en".to_string(), "es".to_string()],
            translations_dir: "translations".to_string(),
        };
        let store = DictionaryStore::new(&config);
        assert_matches!(store.get("xx"), Err(SiteError::InvalidLocale { .. }));
    }

    #[test]
    fn test_store_reports_missing_dictionary() {
        let config = I18nConfig {
            default_locale: "en".to_string(),
            supported_locales: vec!["en".to_string(), "es".to_string()],
            translations_dir: "translations".to_string(),
        };
        let store = DictionaryStore::new(&config);
        assert_matches!(store.get("es"), Err(SiteError::MissingDictionary { .. }));
    }
}
