//! Password Hashing and Verification
//!
//! Password handling with:
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Zeroization of sensitive data
//!
//! The length policy here is deliberately loose (the account layer adds
//! context-dependent rules such as "must not contain the nickname").
//! Clear text is never persisted; only PHC-format hash strings reach
//! the database.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// This type ensures that password data is securely erased from memory
/// when the value is dropped, preventing memory inspection attacks.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// - Minimum 4 characters, maximum 128
    /// - No control characters
    /// - Not empty/whitespace only
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let len = raw.chars().count();
        if len < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: len,
            });
        }
        if len > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: len,
            });
        }

        if raw.chars().any(|c| c.is_control()) {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(raw))
    }

    /// Borrow the raw password for policy checks and hashing
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClearTextPassword(***)")
    }
}

// ============================================================================
// Hashed Password (PHC string)
// ============================================================================

/// Argon2id password hash in PHC string format
///
/// This is the only password representation that may be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Hash a clear text password with a fresh random salt
    pub fn from_clear_text(password: &ClearTextPassword) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_str().as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(Self(hash.to_string()))
    }

    /// Reconstruct from a stored PHC string, validating the format
    pub fn from_phc_string(phc: String) -> Result<Self, PasswordHashError> {
        PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self(phc))
    }

    /// Verify a clear text password against this hash
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only for malformed hashes.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(&self.0).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        match Argon2::default().verify_password(password.as_str().as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
        }
    }

    /// The PHC string for persistence
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pw(raw: &str) -> ClearTextPassword {
        ClearTextPassword::new(raw.to_string()).unwrap()
    }

    #[test]
    fn test_policy_too_short() {
        let err = ClearTextPassword::new("abc".to_string()).unwrap_err();
        assert_eq!(err, PasswordPolicyError::TooShort { min: 4, actual: 3 });
    }

    #[test]
    fn test_policy_minimum_accepted() {
        assert!(ClearTextPassword::new("abcd".to_string()).is_ok());
        assert!(ClearTextPassword::new("1234".to_string()).is_ok());
    }

    #[test]
    fn test_policy_whitespace_only() {
        let err = ClearTextPassword::new("    ".to_string()).unwrap_err();
        assert_eq!(err, PasswordPolicyError::EmptyOrWhitespace);
    }

    #[test]
    fn test_policy_control_characters() {
        let err = ClearTextPassword::new("ab\x00cd".to_string()).unwrap_err();
        assert_eq!(err, PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_policy_too_long() {
        let raw = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let err = ClearTextPassword::new(raw).unwrap_err();
        assert!(matches!(err, PasswordPolicyError::TooLong { .. }));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = pw("supersecret");
        assert_eq!(format!("{:?}", password), "ClearTextPassword(***)");
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let password = pw("correct horse");
        let hashed = HashedPassword::from_clear_text(&password).unwrap();

        assert!(hashed.as_str().starts_with("$argon2"));
        assert!(hashed.verify(&password).unwrap());
        assert!(!hashed.verify(&pw("wrong horse")).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = pw("same password");
        let a = HashedPassword::from_clear_text(&password).unwrap();
        let b = HashedPassword::from_clear_text(&password).unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_from_phc_string_rejects_garbage() {
        assert!(HashedPassword::from_phc_string("not a hash".to_string()).is_err());
    }

    #[test]
    fn test_from_phc_string_accepts_own_output() {
        let hashed = HashedPassword::from_clear_text(&pw("roundtrip")).unwrap();
        let restored = HashedPassword::from_phc_string(hashed.as_str().to_string()).unwrap();
        assert!(restored.verify(&pw("roundtrip")).unwrap());
    }
}
