//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the E-Voque web application.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard must be held for the lifetime of the process so the
/// non-blocking file writer flushes on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "evoque-web.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a contact form submission with structured data
pub fn log_contact_submission(locale: &str, name: &str, email: &str) {
    info!(
        locale = locale,
        name = name,
        email = email,
        "Contact form submitted"
    );
}

/// Log an interpreter application submission with structured data
pub fn log_application_submission(locale: &str, full_name: &str, email: &str, service_type: &str) {
    info!(
        locale = locale,
        full_name = full_name,
        email = email,
        service_type = service_type,
        "Interpreter application submitted"
    );
}
