//! Task Error Types
//!
//! Missing rows are a hard failure; ownership and validation problems are
//! reported back to the user as flash messages by the handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Task-specific result type alias
pub type TaskResult<T> = Result<T, TaskError>;

/// Task-specific error variants
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task with the requested id
    #[error("Task not found")]
    NotFound,

    /// The task belongs to a different user
    #[error("You are not authorized to modify this task.")]
    NotOwner,

    /// A field failed validation; message carries the reason
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TaskError::NotFound => StatusCode::NOT_FOUND,
            TaskError::NotOwner => StatusCode::FORBIDDEN,
            TaskError::Validation(_) => StatusCode::BAD_REQUEST,
            TaskError::Database(_) | TaskError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::NotFound => ErrorKind::NotFound,
            TaskError::NotOwner => ErrorKind::Forbidden,
            TaskError::Validation(_) => ErrorKind::BadRequest,
            TaskError::Database(_) | TaskError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether handlers should surface this as a flash + redirect instead
    /// of an error response. Not-found is deliberately NOT flashable.
    pub fn is_user_error(&self) -> bool {
        matches!(self, TaskError::NotOwner | TaskError::Validation(_))
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TaskError::Database(e) => {
                tracing::error!(error = %e, "Task database error");
            }
            TaskError::Internal(msg) => {
                tracing::error!(message = %msg, "Task internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Task error");
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
