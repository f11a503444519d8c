//! Error handling for the E-Voque website
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Main error type for the E-Voque web application
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported locale: {locale}")]
    InvalidLocale { locale: String },

    #[error("No dictionary loaded for locale: {locale}")]
    MissingDictionary { locale: String },

    #[error("Template rendering error: {0}")]
    Template(#[from] askama::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for E-Voque operations
pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    /// HTTP status the error maps to when it escapes a handler
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::InvalidLocale { .. } => StatusCode::NOT_FOUND,
            SiteError::MissingDictionary { .. } => StatusCode::NOT_FOUND,
            SiteError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self, "Request failed");
        }
        let body = match status {
            StatusCode::NOT_FOUND => "Page not found",
            StatusCode::BAD_REQUEST => "Invalid request",
            _ => "Internal server error",
        };
        (status, body).into_response()
    }
}
