//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. User-facing variants double as flash
//! message text; handlers turn them into a redirect, everything else
//! becomes an error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// A field failed format validation; message carries the reason
    #[error("{0}")]
    Validation(String),

    /// Username already exists
    #[error("Username already taken.")]
    UserNameTaken,

    /// Email already exists
    #[error("Email already registered.")]
    EmailTaken,

    /// No account with the submitted email
    #[error("No account found with that email.")]
    EmailNotFound,

    /// Wrong password for an existing account
    #[error("Incorrect password.")]
    IncorrectPassword,

    /// Session not found, malformed token, or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::UserNameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::EmailNotFound
            | AuthError::IncorrectPassword
            | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserNameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::EmailNotFound
            | AuthError::IncorrectPassword
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether this error is safe and useful to show the user as a flash
    /// message on the originating form.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AuthError::Validation(_)
                | AuthError::UserNameTaken
                | AuthError::EmailTaken
                | AuthError::EmailNotFound
                | AuthError::IncorrectPassword
        )
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::EmailNotFound | AuthError::IncorrectPassword => {
                tracing::warn!("Failed login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
