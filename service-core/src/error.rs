use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Body could not be read at all (too large, broken stream). Keeps the
    /// status axum chose for the rejection.
    #[error("Request body rejected: {1}")]
    BodyRejected(StatusCode, String),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Wire shape of every error response.
///
/// Server errors carry only `detail`, the textual description of the failure.
/// Client errors add a short `error` summary.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidBody(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::BodyRejected(status, _) => *status,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) | AppError::ConfigError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::ValidationError(err) => ErrorResponse {
                error: Some("Validation error".to_string()),
                detail: Some(err.to_string()),
            },
            AppError::InvalidBody(msg) => ErrorResponse {
                error: Some("Validation error".to_string()),
                detail: Some(msg),
            },
            AppError::BodyRejected(_, msg) => ErrorResponse {
                error: Some(msg),
                detail: None,
            },
            AppError::NotFound(err) => ErrorResponse {
                error: Some(err.to_string()),
                detail: None,
            },
            AppError::InternalError(err) => {
                tracing::error!(error = %format!("{:#}", err), "Request failed");
                ErrorResponse {
                    error: None,
                    detail: Some(format!("{:#}", err)),
                }
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error while serving request");
                ErrorResponse {
                    error: None,
                    detail: Some(format!("Configuration error: {}", err)),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
