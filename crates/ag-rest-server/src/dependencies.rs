// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Dependency wiring for the REST server

use crate::{config::ServerConfig, models::DatabaseResultStore, state::AppState};
use ag_engine::{CommitEvaluator, ResultStore};
use ag_local_db::Database;
use anyhow::Result;
use std::sync::Arc;

/// Default dependency builder: SQLite storage behind the store capability,
/// one evaluator sharing it
pub struct DefaultServerDependencies {
    state: AppState,
}

impl DefaultServerDependencies {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let db = if config.database_path == ":memory:" {
            Arc::new(Database::open_in_memory()?)
        } else {
            Arc::new(Database::open(&config.database_path)?)
        };

        let store: Arc<dyn ResultStore> = Arc::new(DatabaseResultStore::new(db));
        let evaluator = Arc::new(CommitEvaluator::new(config.scan_policy(), Arc::clone(&store)));

        Ok(Self {
            state: AppState {
                evaluator,
                store,
                config,
            },
        })
    }

    /// Consume the dependency builder and return the resulting app state
    pub fn into_state(self) -> AppState {
        self.state
    }
}
