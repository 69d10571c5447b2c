//! User Entity
//!
//! An account as stored: public handle plus the password hash used to
//! verify logins. The id is assigned by the database at creation.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{nickname::Nickname, user_id::UserId};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub user_id: UserId,
    /// Nickname (unique, for login and display)
    pub nickname: Nickname,
    /// Argon2id hash of the password (clear text is never stored)
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// A user that has not been persisted yet (no id until the insert)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub nickname: Nickname,
    pub password_hash: HashedPassword,
}

impl NewUser {
    pub fn new(nickname: Nickname, password_hash: HashedPassword) -> Self {
        Self {
            nickname,
            password_hash,
        }
    }
}
