// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Commit analysis endpoint

use crate::state::AppState;
use crate::ServerResult;
use ag_rest_api_contract::{validation, AnalyzeRequest, AnalyzeResponse};
use axum::{extract::State, Json};

/// Analyze one commit's file set and return the verdict with its issues.
///
/// Malformed payloads never reach the engine; persistence happens inside
/// the evaluator and does not affect the response.
pub async fn analyze_commit(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ServerResult<Json<AnalyzeResponse>> {
    validation::validate_analyze_request(&request)?;

    tracing::debug!(
        "analyzing commit {} ({} file(s))",
        request.commit_id,
        request.files.len()
    );
    let evaluation = state
        .evaluator
        .evaluate(&request.commit_id, &request.repo_url, &request.files)
        .await;

    Ok(Json(AnalyzeResponse {
        commit_id: request.commit_id,
        status: evaluation.status,
        issues: evaluation.issues,
    }))
}
