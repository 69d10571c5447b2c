//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::{ClearTextPassword, HashedPassword};

use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::nickname::Nickname;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub nickname: String,
    pub password: String,
    /// Must equal `password` exactly
    pub confirm: String,
}

/// Sign up output
#[derive(Debug)]
pub struct SignUpOutput {
    pub user_id: i64,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // Nickname format
        let nickname = Nickname::new(input.nickname)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        // Password policy: base rules, then the two context-dependent ones
        let password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        if password.as_str().contains(nickname.as_str()) {
            return Err(AuthError::Validation(
                "password must not contain the nickname".to_string(),
            ));
        }

        if password.as_str() != input.confirm {
            return Err(AuthError::Validation(
                "password confirmation does not match".to_string(),
            ));
        }

        // Uniqueness check last; it costs a database roundtrip. The
        // unique constraint backstops the race with a concurrent signup.
        if self.user_repo.exists_by_nickname(&nickname).await? {
            return Err(AuthError::NicknameTaken);
        }

        let password_hash = HashedPassword::from_clear_text(&password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = NewUser::new(nickname.clone(), password_hash);
        let user_id = self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user_id,
            nickname = %nickname,
            "User signed up"
        );

        Ok(SignUpOutput {
            user_id: user_id.as_i64(),
        })
    }
}
