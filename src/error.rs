use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tokio::task::JoinError;

#[derive(Debug, ThisError)]
pub enum AppError {
    /// A required configuration value is missing. Displays the bare message:
    /// the search handler embeds it verbatim into its `{error}` body.
    #[error("{0}")]
    Configuration(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Uniqueness or foreign-key constraint violation, after rollback.
    #[error("integrity violation: {0}")]
    Integrity(String),

    /// Third-party recipe API failure, with the upstream detail.
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("password hashing error: {0}")]
    Hash(String),

    #[error("blocking task failed: {0}")]
    Join(#[from] JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            AppError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: self.to_string(),
                },
            ),
            AppError::Integrity(_) => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".to_string(),
                    message: self.to_string(),
                },
            ),
            AppError::Upstream(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Upstream service is unavailable.".to_string(),
                },
            ),
            AppError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "CONFIGURATION".to_string(),
                    message: "Server is misconfigured.".to_string(),
                },
            ),
            AppError::Database(_) | AppError::Hash(_) | AppError::Join(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
