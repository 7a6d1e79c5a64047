//! Server error types and handling

use ag_rest_api_contract::{ApiContractError, ProblemDetails};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Server result type
pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Contract error: {0}")]
    Contract(#[from] ApiContractError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("History unavailable: {0}")]
    HistoryUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Convert error to Problem+JSON response
    pub fn to_problem(&self) -> ProblemDetails {
        match self {
            ServerError::Contract(err) => ProblemDetails {
                problem_type: "https://docs.example.com/errors/validation".to_string(),
                title: "Validation Error".to_string(),
                status: Some(StatusCode::BAD_REQUEST.as_u16()),
                detail: err.to_string(),
            },
            ServerError::BadRequest(msg) => ProblemDetails {
                problem_type: "https://docs.example.com/errors/bad-request".to_string(),
                title: "Bad Request".to_string(),
                status: Some(StatusCode::BAD_REQUEST.as_u16()),
                detail: msg.clone(),
            },
            ServerError::HistoryUnavailable(msg) => ProblemDetails {
                problem_type: "https://docs.example.com/errors/history".to_string(),
                title: "History Unavailable".to_string(),
                status: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
                detail: format!("Failed to fetch history: {}", msg),
            },
            ServerError::Internal(msg) => ProblemDetails {
                problem_type: "https://docs.example.com/errors/internal".to_string(),
                title: "Internal Server Error".to_string(),
                status: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
                detail: msg.clone(),
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let problem = self.to_problem();
        let status = StatusCode::from_u16(problem.status.unwrap_or(500))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(problem)).into_response()
    }
}

/// Convert any error to ServerError
impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

/// Convert IO errors
impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_errors_map_to_bad_request() {
        let err = ServerError::BadRequest("missing file list".to_string());
        let problem = err.to_problem();
        assert_eq!(problem.status, Some(400));
        assert_eq!(problem.detail, "missing file list");
    }

    #[test]
    fn history_faults_map_to_server_error() {
        let err = ServerError::HistoryUnavailable("database is locked".to_string());
        let problem = err.to_problem();
        assert_eq!(problem.status, Some(500));
        assert!(problem.detail.contains("database is locked"));
    }
}
