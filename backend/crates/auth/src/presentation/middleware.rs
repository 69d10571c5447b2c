//! Auth Middleware
//!
//! The request-level gate for protected routes: extract the bearer
//! credential, verify and resolve it, and attach the identity to the
//! request. Runs before any handler validation or storage access.

use axum::body::Body;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{nickname::Nickname, user_id::UserId};
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<AuthConfig>,
}

/// The authenticated identity, attached to request extensions on success
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub nickname: Nickname,
}

/// Extract the token half of an `Authorization: Bearer <token>` header.
///
/// Missing header, empty value, a different scheme, or a missing token
/// half all collapse into `None` ("no credential").
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let mut parts = value.split(' ');
    let scheme = parts.next()?;
    let token = parts.next().unwrap_or("");

    if scheme != "Bearer" || token.is_empty() {
        return None;
    }

    Some(token)
}

/// Middleware that requires a resolved identity
///
/// - no credential: 401 "login required"
/// - bad token, or a token whose subject no longer exists: 401
///   "authentication failed"
/// - success: [`CurrentUser`] inserted into request extensions
pub async fn require_identity<U>(
    state: AuthGateState<U>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = bearer_token(req.headers()).map(str::to_owned) else {
        return Err(AuthError::LoginRequired.into_response());
    };

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let user = match use_case.execute(&token).await {
        Ok(user) => user,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentUser {
        user_id: user.user_id,
        nickname: user.nickname,
    });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_happy_path() {
        let headers = headers_with("Bearer abc.def");
        assert_eq!(bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_missing_header_is_no_credential() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_wrong_scheme_is_no_credential() {
        assert_eq!(bearer_token(&headers_with("Basic abc")), None);
        assert_eq!(bearer_token(&headers_with("bearer abc")), None);
        assert_eq!(bearer_token(&headers_with("Token abc")), None);
    }

    #[test]
    fn test_missing_token_half_is_no_credential() {
        assert_eq!(bearer_token(&headers_with("Bearer")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("")), None);
    }

    #[test]
    fn test_double_space_is_no_credential() {
        // "Bearer  x" splits into an empty token half
        assert_eq!(bearer_token(&headers_with("Bearer  abc")), None);
    }
}
