//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{Result, SiteError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_i18n_config(&settings.i18n)?;
    validate_site_config(&settings.site)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(SiteError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(SiteError::Config("Server port must be greater than 0".to_string()));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(SiteError::Config("Default locale is required".to_string()));
    }

    if config.supported_locales.is_empty() {
        return Err(SiteError::Config(
            "At least one supported locale is required".to_string(),
        ));
    }

    if !config.supported_locales.contains(&config.default_locale) {
        return Err(SiteError::Config(
            "Default locale must be in supported locales list".to_string(),
        ));
    }

    if config.translations_dir.is_empty() {
        return Err(SiteError::Config("Translations directory is required".to_string()));
    }

    Ok(())
}

/// Validate site identity configuration
fn validate_site_config(config: &super::SiteConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(SiteError::Config("Site name is required".to_string()));
    }

    if !crate::utils::helpers::is_valid_email(&config.contact_email) {
        return Err(SiteError::Config(format!(
            "Invalid contact email: {}",
            config.contact_email
        )));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(SiteError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(SiteError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
