//! API DTOs (Data Transfer Objects)
//!
//! Request fields default to empty strings so that an absent field falls
//! into the same validation branch as an empty one, instead of being
//! rejected by the deserializer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub password: String,
    /// Repeated password, must match exactly
    #[serde(default)]
    pub confirm: String,
}

// ============================================================================
// Log In
// ============================================================================

/// Log in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInRequest {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub password: String,
}

/// Log in response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInResponse {
    pub token: String,
}

// ============================================================================
// Shared
// ============================================================================

/// Plain success acknowledgement
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_missing_fields_default_to_empty() {
        let request: SignUpRequest = serde_json::from_str(r#"{"nickname":"abc"}"#).unwrap();
        assert_eq!(request.nickname, "abc");
        assert_eq!(request.password, "");
        assert_eq!(request.confirm, "");
    }

    #[test]
    fn test_log_in_request_deserialization() {
        let json = r#"{"nickname":"Developer","password":"1234"}"#;
        let request: LogInRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.nickname, "Developer");
        assert_eq!(request.password, "1234");
    }

    #[test]
    fn test_log_in_response_serialization() {
        let response = LogInResponse {
            token: "abc.def".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"token":"abc.def"}"#);
    }

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse { message: "done" };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"done"}"#);
    }
}
