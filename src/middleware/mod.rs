//! Middleware module
//!
//! This module contains middleware for request processing

pub mod locale;
pub mod logging;

pub use locale::{locale_redirect, resolve_path, RouteDecision};
pub use logging::request_logging;
