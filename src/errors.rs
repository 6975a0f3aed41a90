use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use thiserror::Error;

/// Failures of the price store. An empty result is not an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("could not connect to the database: {0}")]
    Connection(String),
    #[error("query failed: {0}")]
    Query(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::Connection(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Store(StoreError::Query(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match self {
            AppError::Validation(msg) => msg,
            AppError::Store(StoreError::Connection(_)) => "Price database unavailable".to_string(),
            AppError::Store(StoreError::Query(_)) => "Internal server error".to_string(),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
