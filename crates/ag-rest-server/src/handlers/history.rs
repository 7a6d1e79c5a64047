// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Analysis history endpoint

use crate::error::ServerError;
use crate::state::AppState;
use crate::ServerResult;
use ag_rest_api_contract::{validation, CommitHistoryEntry, HistoryQuery, HistoryResponse};
use axum::{
    extract::{Query, State},
    Json,
};

/// Return past commit evaluations, most-recent-first.
///
/// A failed store read surfaces as a retrieval fault; no partial history is
/// served.
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> ServerResult<Json<HistoryResponse>> {
    validation::validate_history_query(&query)?;

    let commits = state
        .store
        .fetch_history(query.effective_limit())
        .await
        .map_err(|err| ServerError::HistoryUnavailable(err.to_string()))?;

    Ok(Json(HistoryResponse {
        commits: commits.into_iter().map(CommitHistoryEntry::from).collect(),
    }))
}
