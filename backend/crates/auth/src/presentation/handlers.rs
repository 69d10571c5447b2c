//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LogInRequest, LogInResponse, MessageResponse, SignUpRequest};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/signup
pub async fn sign_up<U>(
    State(state): State<AuthAppState<U>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        nickname: req.nickname,
        password: req.password,
        confirm: req.confirm,
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "signed up successfully",
        }),
    ))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/login
pub async fn log_in<U>(
    State(state): State<AuthAppState<U>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<Json<LogInResponse>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.repo.clone(), state.config.clone());

    let input = LogInInput {
        nickname: req.nickname,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LogInResponse {
        token: output.token,
    }))
}
