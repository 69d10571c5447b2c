//! Application Configuration
//!
//! Configuration for the Auth application layer.
//!
//! The token signing secret is an explicit construction argument, never
//! read from ambient process state; tests construct configs with
//! distinct secrets.

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing (32 bytes, fixed at deploy time)
    pub token_secret: [u8; 32],
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
        }
    }
}

impl AuthConfig {
    /// Create config from a deploy-time secret
    pub fn new(token_secret: [u8; 32]) -> Self {
        Self { token_secret }
    }

    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
        }
    }
}
