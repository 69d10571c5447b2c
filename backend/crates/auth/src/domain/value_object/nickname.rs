//! Nickname Value Object
//!
//! The nickname is the public handle of an account: it is what other
//! users see next to posts and comments, and it doubles as the login
//! identifier.
//!
//! ## Invariants
//! - At least 3 characters
//! - ASCII alphanumeric only (a-z, A-Z, 0-9)
//! - Globally unique (enforced by the repository / database)
//! - Immutable after account creation

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length for a nickname (in characters)
pub const NICKNAME_MIN_LENGTH: usize = 3;

/// Error returned when nickname validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NicknameError {
    /// Nickname is shorter than [`NICKNAME_MIN_LENGTH`]
    #[error("Nickname must be at least {NICKNAME_MIN_LENGTH} characters")]
    TooShort,

    /// Nickname contains characters outside a-z, A-Z, 0-9
    #[error("Nickname may only contain alphanumeric characters")]
    InvalidCharacter,
}

/// Validated nickname
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    /// Validate and construct a nickname
    pub fn new(raw: impl Into<String>) -> Result<Self, NicknameError> {
        let raw = raw.into();

        if raw.chars().count() < NICKNAME_MIN_LENGTH {
            return Err(NicknameError::TooShort);
        }

        if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(NicknameError::InvalidCharacter);
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Nickname {
    type Error = NicknameError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Nickname> for String {
    fn from(nickname: Nickname) -> Self {
        nickname.0
    }
}
