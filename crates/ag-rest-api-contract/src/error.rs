// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types for API contract validation and parsing

use thiserror::Error;

/// Errors that can occur during API contract validation and parsing
#[derive(Debug, Error)]
pub enum ApiContractError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Problem+JSON error response format as per RFC 7807
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_details_serialization() {
        let problem = ProblemDetails {
            problem_type: "https://docs.example.com/errors/bad-request".to_string(),
            title: "Bad Request".to_string(),
            status: Some(400),
            detail: "limit must be a positive integer".to_string(),
        };

        let json = serde_json::to_string(&problem).unwrap();
        let deserialized: ProblemDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(problem, deserialized);
        assert!(json.contains("\"type\""));
    }
}
