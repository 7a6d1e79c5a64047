// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Validation helpers for API contract types

use crate::error::ApiContractError;
use crate::types::{AnalyzeRequest, HistoryQuery};
use validator::Validate;

/// Validate an analyze request
pub fn validate_analyze_request(request: &AnalyzeRequest) -> Result<(), ApiContractError> {
    request.validate()?;
    Ok(())
}

/// Validate history query parameters
pub fn validate_history_query(query: &HistoryQuery) -> Result<(), ApiContractError> {
    query.validate()?;
    Ok(())
}
