//! Lookout account auth client with pluggable session persistence.

use std::fmt;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::normalize_base_url;
use crate::error::parse_detail;
use crate::models::SessionUser;

/// An authenticated session against the Lookout API.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: SessionUser,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AuthSession")
            .field("access_token", &"[REDACTED]")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid auth configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Auth API error: {0}")]
    Api(String),
    #[error("Secure storage error: {0}")]
    SecureStorage(String),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Storage seam for the serialized session (keyring on desktop).
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_session(&self) -> AuthResult<Option<AuthSession>>;
    fn save_session(&self, session: &AuthSession) -> AuthResult<()>;
    fn clear_session(&self) -> AuthResult<()>;
}

#[derive(Clone)]
pub struct AuthClient<S: SessionPersistence> {
    base_url: String,
    client: Client,
    store: S,
}

impl<S: SessionPersistence> AuthClient<S> {
    pub fn new(base_url: impl AsRef<str>, store: S) -> AuthResult<Self> {
        let base_url =
            normalize_base_url(base_url.as_ref()).map_err(AuthError::InvalidConfiguration)?;
        Ok(Self {
            base_url,
            client: Client::builder().build()?,
            store,
        })
    }

    /// Restores a persisted session, validating it against the server.
    ///
    /// A server rejection clears the stored session. A transport failure
    /// keeps it, so the app still opens with the cached profile while
    /// offline.
    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        let Some(stored) = self.store.load_session()? else {
            return Ok(None);
        };

        match self.current_user(&stored.access_token).await {
            Ok(user) => {
                let session = AuthSession {
                    access_token: stored.access_token,
                    user,
                };
                self.store.save_session(&session)?;
                Ok(Some(session))
            }
            Err(AuthError::Api(message)) => {
                tracing::warn!("Stored session rejected by the server: {}", message);
                self.store.clear_session()?;
                Ok(None)
            }
            Err(error) => {
                tracing::warn!("Could not validate stored session: {}", error);
                Ok(Some(stored))
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> AuthResult<AuthSession> {
        validate_login_input(username, password)?;

        let payload = serde_json::json!({
            "username": username,
            "password": password,
        });
        let response = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_auth_error(status, &body)));
        }

        let payload = response.json::<LoginResponse>().await?;
        let session = AuthSession {
            access_token: payload.access_token,
            user: payload.user,
        };
        self.store.save_session(&session)?;
        Ok(session)
    }

    pub async fn current_user(&self, access_token: &str) -> AuthResult<SessionUser> {
        let response = self
            .client
            .get(format!("{}/auth/me", self.base_url))
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_auth_error(status, &body)));
        }
        Ok(response.json::<SessionUser>().await?)
    }

    /// Signs out on the server and forgets the persisted session.
    ///
    /// Local state is cleared before the network call so sign-out never
    /// blocks on the server. A 401 means the token is already dead and
    /// counts as success.
    pub async fn logout(&self, access_token: &str) -> AuthResult<()> {
        self.store.clear_session()?;

        let response = self
            .client
            .post(format!("{}/auth/logout", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await?;
        if !(response.status().is_success() || response.status() == StatusCode::UNAUTHORIZED) {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Api(parse_auth_error(status, &body)));
        }
        Ok(())
    }
}

fn validate_login_input(username: &str, password: &str) -> AuthResult<()> {
    if username.trim().is_empty() {
        return Err(AuthError::Api("Username is required".to_string()));
    }
    if password.trim().is_empty() {
        return Err(AuthError::Api("Password is required".to_string()));
    }
    Ok(())
}

fn parse_auth_error(status: StatusCode, body: &str) -> String {
    if let Some(detail) = parse_detail(body) {
        return detail;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    user: SessionUser,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_session() -> AuthSession {
        AuthSession {
            access_token: "secret-access-token".to_string(),
            user: SessionUser {
                username: "mara".to_string(),
                email: "mara@example.com".to_string(),
                created_at: "2024-01-01T00:00:00Z".to_string(),
                is_active: true,
            },
        }
    }

    #[test]
    fn session_debug_redacts_token() {
        let rendered = format!("{:?}", sample_session());
        assert!(!rendered.contains("secret-access-token"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn validate_login_input_requires_both_fields() {
        assert!(validate_login_input("", "hunter2").is_err());
        assert!(validate_login_input("mara", "   ").is_err());
        assert!(validate_login_input("mara", "hunter2").is_ok());
    }

    #[test]
    fn parse_auth_error_prefers_detail_field() {
        let message = parse_auth_error(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "Incorrect username or password"}"#,
        );
        assert_eq!(message, "Incorrect username or password");
    }

    #[test]
    fn parse_auth_error_falls_back_to_status() {
        assert_eq!(parse_auth_error(StatusCode::BAD_GATEWAY, ""), "HTTP 502");
        assert_eq!(
            parse_auth_error(StatusCode::BAD_GATEWAY, "upstream down"),
            "upstream down (502)"
        );
    }

    #[test]
    fn login_response_deserializes() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"access_token":"tok","token_type":"bearer","user":{"username":"mara","email":"mara@example.com","created_at":"2024-01-01T00:00:00Z","is_active":true}}"#,
        )
        .unwrap();
        assert_eq!(response.access_token, "tok");
        assert_eq!(response.user.username, "mara");
    }
}
