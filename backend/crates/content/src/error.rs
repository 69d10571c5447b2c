//! Content Error Types
//!
//! This module provides post/comment-specific error variants that
//! integrate with the unified `kernel::error::AppError` system.
//!
//! Validation failures map to 412 for posts and comments alike (see
//! DESIGN.md). The not-owner rejection answers 401 like the
//! authentication errors but stays a separate variant: it is an
//! authorization failure, not an authentication one.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Content-specific result type alias
pub type ContentResult<T> = Result<T, ContentError>;

/// Content-specific error variants
#[derive(Debug, Error)]
pub enum ContentError {
    /// Post create/update without title or content
    #[error("title and content are required")]
    MissingPostFields,

    /// Comment create/update without text
    #[error("comment text is required")]
    MissingCommentText,

    /// Referenced post does not exist
    #[error("post does not exist")]
    PostNotFound,

    /// Referenced comment does not exist
    #[error("comment does not exist")]
    CommentNotFound,

    /// Authenticated, but not the owner of the resource
    #[error("only the author may modify this resource")]
    NotOwner,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContentError::MissingPostFields | ContentError::MissingCommentText => {
                StatusCode::PRECONDITION_FAILED
            }
            ContentError::PostNotFound | ContentError::CommentNotFound => StatusCode::NOT_FOUND,
            ContentError::NotOwner => StatusCode::UNAUTHORIZED,
            // Unexpected failures surface as a generic 400; detail stays in the log
            ContentError::Database(_) | ContentError::Internal(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::MissingPostFields | ContentError::MissingCommentText => {
                ErrorKind::PreconditionFailed
            }
            ContentError::PostNotFound | ContentError::CommentNotFound => ErrorKind::NotFound,
            ContentError::NotOwner => ErrorKind::Unauthorized,
            ContentError::Database(_) | ContentError::Internal(_) => ErrorKind::BadRequest,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Message exposed to the caller
    fn error_message(&self) -> String {
        match self {
            ContentError::Database(_) | ContentError::Internal(_) => {
                "failed to process the request".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContentError::Database(e) => {
                tracing::error!(error = %e, "Content database error");
            }
            ContentError::Internal(msg) => {
                tracing::error!(message = %msg, "Content internal error");
            }
            ContentError::NotOwner => {
                tracing::warn!("Mutation attempt by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Content error");
            }
        }
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        let kind = err.kind();
        let message = err.error_message();
        AppError::new(kind, message)
    }
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = serde_json::json!({ "errorMessage": self.error_message() });
        (status, Json(body)).into_response()
    }
}
