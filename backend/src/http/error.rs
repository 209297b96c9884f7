//! HTTP error handling and response types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::services::CalculationError;
use crate::store::StoreError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
    /// Mark id the error is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
            mark: None,
        }
    }

    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = Some(mark.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request payload
    BadRequest(String),
    /// Mark resolution or course shape problem
    Calculation(CalculationError),
    /// Waypoint file could not be loaded
    Store(StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Calculation(err) => {
                let code = match err {
                    CalculationError::MarkNotFound(_) => "MARK_NOT_FOUND",
                    CalculationError::TooFewMarks(_) => "TOO_FEW_MARKS",
                };
                let mut body = ApiError::new(code, err.to_string());
                if let Some(id) = err.mark_id() {
                    body = body.with_mark(id);
                }
                (StatusCode::BAD_REQUEST, body)
            }
            AppError::Store(err) => {
                error!(error = %err, "Failed to load marks");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("MARKS_UNAVAILABLE", err.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        AppError::Calculation(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}
