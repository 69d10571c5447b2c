//! Authenticate Use Case
//!
//! Turns a raw bearer token into a resolved account: verify the
//! signature, then look the subject up in the identity store.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Verify the token and resolve its subject to an account.
    ///
    /// A token whose signature verifies but whose subject no longer
    /// exists (account deleted with an outstanding token) is treated
    /// exactly like an invalid token. Nothing downstream ever sees a
    /// verified-but-unresolved identity.
    pub async fn execute(&self, raw_token: &str) -> AuthResult<User> {
        let subject = TokenCodec::new(self.config.token_secret).verify(raw_token)?;

        self.user_repo
            .find_by_id(subject)
            .await?
            .ok_or(AuthError::TokenInvalid)
    }
}
