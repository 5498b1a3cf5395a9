//! Application state shared across all handlers.

use std::sync::Arc;
use wg_core::EmbedConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EmbedConfig>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(EmbedConfig::default())
    }

    pub fn with_config(config: EmbedConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
