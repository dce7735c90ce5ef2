use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::CompletionError;
use crate::pipeline::prompt::PromptError;
use crate::pipeline::schema::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{"message": "..."}`; upstream details are logged, never returned.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Profile incomplete: missing {0}")]
    ProfileIncomplete(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream timed out")]
    UpstreamTimeout,

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ProfileNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::ProfileIncomplete(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::UpstreamUnavailable(_) | AppError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::Timeout => AppError::UpstreamTimeout,
            other => AppError::UpstreamUnavailable(other.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::MalformedResponse(e.to_string())
    }
}

impl From<PromptError> for AppError {
    fn from(e: PromptError) -> Self {
        match e {
            PromptError::MissingField(field) => AppError::ProfileIncomplete(field.to_string()),
            PromptError::UnboundPlaceholder(_) => AppError::Internal(e.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::ProfileNotFound => "User not found".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::ProfileIncomplete(field) => {
                format!("Your profile is incomplete: please add your {field} and try again")
            }
            AppError::Unauthorized(msg) => msg.to_string(),
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Completion API error: {msg}");
                "The assistant is unavailable right now, please try again".to_string()
            }
            AppError::UpstreamTimeout => {
                tracing::warn!("Completion API call timed out");
                "The assistant timed out, please try again".to_string()
            }
            AppError::MalformedResponse(msg) => {
                tracing::error!("Malformed completion: {msg}");
                "The assistant returned an unexpected response, please try again".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                "Server error".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "Server error".to_string()
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
