//! Configuration loading integration tests
//!
//! These tests read the repository config.toml and environment overrides,
//! so they are serialized to avoid cross-test env leakage.

use serial_test::serial;

use evoque_web::config::Settings;

#[test]
#[serial]
fn test_settings_load_from_repository_config() {
    let settings = Settings::new().expect("failed to load config.toml");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.i18n.default_locale, "en");
    assert_eq!(
        settings.i18n.supported_locales,
        vec!["en".to_string(), "es".to_string()]
    );
    assert!(settings.validate().is_ok());
}

#[test]
#[serial]
fn test_environment_variable_overrides_config_file() {
    std::env::set_var("EVOQUE_SERVER__PORT", "8080");
    let settings = Settings::new().expect("failed to load config with env override");
    std::env::remove_var("EVOQUE_SERVER__PORT");

    assert_eq!(settings.server.port, 8080);
}

#[test]
#[serial]
fn test_bind_addr_combines_host_and_port() {
    let settings = Settings::default();
    assert_eq!(settings.bind_addr(), "0.0.0.0:3000");
}
