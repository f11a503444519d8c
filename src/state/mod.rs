//! Shared application state
//!
//! This module defines the immutable state handed to every request handler:
//! the validated settings and the dictionary table, both built once at
//! startup and injected through axum's `State` extractor rather than held
//! as module-level globals.

use std::sync::Arc;

use crate::config::Settings;
use crate::i18n::DictionaryStore;

/// Read-only per-process state shared across request tasks
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub dictionaries: Arc<DictionaryStore>,
}

impl AppState {
    /// Create application state from startup components
    pub fn new(settings: Settings, dictionaries: DictionaryStore) -> Self {
        Self {
            settings: Arc::new(settings),
            dictionaries: Arc::new(dictionaries),
        }
    }
}
