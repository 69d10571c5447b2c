//! Login Token Signing and Verification
//!
//! Tokens are stateless: `base64url(claims).base64url(hmac)`, where the
//! claims JSON carries the subject's user id and the signature is
//! HMAC-SHA256 over the encoded claims with the deploy-time secret.
//! Nothing is persisted per token; the signature alone authenticates.
//!
//! Tokens carry no expiry claim, so an issued token stays valid until
//! the secret is rotated. Known debt; adding an `exp` claim and a
//! revocation path is the documented follow-up (DESIGN.md).

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Claims payload of a login token
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    user_id: i64,
}

/// Signs and verifies login tokens with a single shared secret
#[derive(Clone)]
pub struct TokenCodec {
    secret: [u8; 32],
}

impl TokenCodec {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Issue a signed token for the given subject
    pub fn issue(&self, user_id: UserId) -> AuthResult<String> {
        let claims = TokenClaims {
            user_id: user_id.as_i64(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|e| AuthError::Internal(format!("Token claims serialization: {e}")))?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(&payload);

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Internal(format!("HMAC init: {e}")))?;
        mac.update(payload_b64.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{}.{}",
            payload_b64,
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Verify a token and extract the subject id
    ///
    /// Any structural defect (wrong part count, bad base64, bad JSON)
    /// and any signature mismatch collapse into the same error; the
    /// caller cannot distinguish a tampered token from a garbled one.
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .filter(|(payload, signature)| {
                !payload.is_empty() && !signature.is_empty() && !signature.contains('.')
            })
            .ok_or(AuthError::TokenInvalid)?;

        let mut mac = Hmac::<Sha256>::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Internal(format!("HMAC init: {e}")))?;
        mac.update(payload_b64.as_bytes());

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::TokenInvalid)?;

        // Constant-time comparison via Mac::verify_slice
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::TokenInvalid)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::TokenInvalid)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::TokenInvalid)?;

        Ok(UserId::from_i64(claims.user_id))
    }
}
