// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! AutoGuard REST API contract types and validation
//!
//! This crate defines the schema types and validation for the analysis
//! service's REST API. They are shared between the server and any client
//! implementations, independent of the transport wiring.

pub mod error;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;
