//! E-Voque marketing website
//!
//! A server-rendered marketing site for an interpretation-services company.
//! This library provides modular components for locale routing, dictionary
//! content resolution with per-slot fallbacks, and page rendering with
//! multi-language support.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, SiteError};

// Re-export main components for easy access
pub use handlers::router;
pub use i18n::DictionaryStore;
pub use state::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
