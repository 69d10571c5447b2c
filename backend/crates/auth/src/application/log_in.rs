//! Log In Use Case
//!
//! Verifies a nickname/password pair and issues a signed token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::nickname::Nickname;
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub nickname: String,
    pub password: String,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Log in use case
pub struct LogInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LogInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Authenticate and issue a token.
    ///
    /// Every rejection path collapses into [`AuthError::CredentialMismatch`]
    /// so the response never reveals whether the nickname or the password
    /// was wrong.
    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        let nickname =
            Nickname::new(input.nickname).map_err(|_| AuthError::CredentialMismatch)?;

        let user = self
            .user_repo
            .find_by_nickname(&nickname)
            .await?
            .ok_or(AuthError::CredentialMismatch)?;

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::CredentialMismatch)?;

        let password_valid = user
            .password_hash
            .verify(&password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::CredentialMismatch);
        }

        let token = TokenCodec::new(self.config.token_secret).issue(user.user_id)?;

        tracing::info!(
            user_id = %user.user_id,
            nickname = %user.nickname,
            "User logged in"
        );

        Ok(LogInOutput { token })
    }
}
