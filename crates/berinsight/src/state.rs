//! Application state shared by the API handlers.
//!
//! Deliberately thin: the service is stateless between requests. Every
//! handler re-reads the persisted document, so the only thing handlers
//! share is the resolved configuration.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
