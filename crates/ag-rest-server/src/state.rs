//! Server state management

use crate::config::ServerConfig;
use ag_engine::{CommitEvaluator, ResultStore};
use std::sync::Arc;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    /// Evaluator running the scan for every analyze request
    pub evaluator: Arc<CommitEvaluator>,

    /// Result store, also queried directly by the history endpoint
    pub store: Arc<dyn ResultStore>,

    /// Server configuration
    pub config: ServerConfig,
}

impl AppState {
    /// Get configuration reference
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
