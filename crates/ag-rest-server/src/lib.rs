// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! AutoGuard REST API server
//!
//! This crate implements the REST API server for the commit analysis
//! service. It wires the analysis engine to SQLite-backed persistence and
//! exposes endpoints for commit analysis, history retrieval, and health
//! checks.

pub mod config;
pub mod dependencies;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod state;

pub use config::{ScanConfig, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::Server;
