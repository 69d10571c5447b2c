//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Authentication failures (`LoginRequired`, `TokenInvalid`) are kept
/// apart from credential failures at login (`CredentialMismatch`) and
/// from input validation failures, because they map to different
/// statuses on the wire.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Protected endpoint called without any credential
    #[error("login required")]
    LoginRequired,

    /// Credential present but the token fails verification, or the
    /// subject no longer resolves to an account
    #[error("authentication failed")]
    TokenInvalid,

    /// Login with a nickname/password pair that does not match.
    /// One message for both cases; the response must not reveal
    /// which half was wrong.
    #[error("check your nickname or password")]
    CredentialMismatch,

    /// Signup with a nickname that is already registered
    #[error("nickname is already taken")]
    NicknameTaken,

    /// Malformed signup input (nickname or password policy)
    #[error("{0}")]
    Validation(String),

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
            AuthError::LoginRequired | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::CredentialMismatch
            | AuthError::NicknameTaken
            | AuthError::Validation(_) => StatusCode::PRECONDITION_FAILED,
            // Unexpected failures surface as a generic 400; detail stays in the log
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::LoginRequired | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::CredentialMismatch
            | AuthError::NicknameTaken
            | AuthError::Validation(_) => ErrorKind::PreconditionFailed,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Message exposed to the caller
    fn error_message(&self) -> String {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                "failed to process the request".to_string()
            }
            other => other.to_string(),
        }
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
            AuthError::CredentialMismatch => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::warn!("Invalid token presented");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let kind = err.kind();
        let message = err.error_message();
        AppError::new(kind, message)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = serde_json::json!({ "errorMessage": self.error_message() });
        (status, Json(body)).into_response()
    }
}
