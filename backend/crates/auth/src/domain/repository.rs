//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{nickname::Nickname, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user, returning the database-assigned id
    async fn create(&self, user: &NewUser) -> AuthResult<UserId>;

    /// Find user by ID
    ///
    /// Absence is `None`, not an error; an outstanding token may refer
    /// to an account that no longer exists.
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by nickname
    async fn find_by_nickname(&self, nickname: &Nickname) -> AuthResult<Option<User>>;

    /// Check if a nickname is already taken
    async fn exists_by_nickname(&self, nickname: &Nickname) -> AuthResult<bool>;
}
