//! REST auth client.
//!
//! DESIGN
//! ======
//! Thin reqwest wrapper over the three auth endpoints. Status/body decoding
//! lives in the pure `decode_auth_response` for testability. The client
//! holds a [`SessionVault`] handle and clears it on any 401 before the
//! error is returned; persistence on success belongs to the store, not
//! this layer.

use std::time::Duration;

use tracing::warn;

use super::types::{LoginCredentials, ProfileUpdate, RegisterCredentials, UserSession};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::vault::SessionVault;

const REGISTER_PATH: &str = "/api/v1/auth/register";
const LOGIN_PATH: &str = "/api/v1/auth/login";
const UPDATE_PATH: &str = "/api/v1/auth/updateUser";

// =============================================================================
// AUTH API TRAIT
// =============================================================================

/// Async port for the three auth operations. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// Create an account and return the fresh session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the request fails, the server rejects
    /// the credentials, or the response is malformed.
    async fn register(&self, credentials: &RegisterCredentials) -> Result<UserSession, AuthError>;

    /// Authenticate and return the session.
    ///
    /// # Errors
    ///
    /// Same contract as [`AuthApi::register`].
    async fn login(&self, credentials: &LoginCredentials) -> Result<UserSession, AuthError>;

    /// Update the authenticated user's profile and return the refreshed
    /// session (the server rotates the token).
    ///
    /// # Errors
    ///
    /// Same contract as [`AuthApi::register`], plus
    /// [`AuthError::SessionExpired`] when the token is no longer accepted.
    async fn update(&self, fields: &ProfileUpdate, token: &str) -> Result<UserSession, AuthError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
    vault: SessionVault,
}

impl HttpAuthClient {
    /// Build the client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::HttpClientBuild`] if reqwest cannot construct
    /// the underlying client.
    pub fn new(config: &AuthConfig, vault: SessionVault) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), vault })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<UserSession, AuthError> {
        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        // Authorization expiry clears the persisted session regardless of
        // which operation tripped it. Best-effort: a failing clear is logged,
        // the expiry error still propagates.
        if status == 401 {
            if let Err(e) = self.vault.clear() {
                warn!(error = %e, "vault clear on 401 failed");
            }
        }

        decode_auth_response(status, &body)
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthClient {
    async fn register(&self, credentials: &RegisterCredentials) -> Result<UserSession, AuthError> {
        self.execute(self.http.post(self.url(REGISTER_PATH)).json(credentials))
            .await
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<UserSession, AuthError> {
        self.execute(self.http.post(self.url(LOGIN_PATH)).json(credentials))
            .await
    }

    async fn update(&self, fields: &ProfileUpdate, token: &str) -> Result<UserSession, AuthError> {
        self.execute(
            self.http
                .patch(self.url(UPDATE_PATH))
                .header("Authorization", format!("Bearer {token}"))
                .json(fields),
        )
        .await
    }
}

// =============================================================================
// DECODING
// =============================================================================

#[derive(serde::Deserialize)]
struct ErrorBody {
    msg: String,
}

/// Map an auth endpoint's status and body to the operation result.
///
/// 2xx parses `{user, token}`; 401 is authorization expiry; any other
/// status surfaces the server's `{msg}` string, falling back to a generic
/// line when the body carries none.
///
/// # Errors
///
/// Every non-2xx status is an error by this contract; 2xx with an
/// unparseable body is [`AuthError::Decode`].
pub fn decode_auth_response(status: u16, body: &str) -> Result<UserSession, AuthError> {
    match status {
        200..=299 => serde_json::from_str::<UserSession>(body).map_err(|e| AuthError::Decode(e.to_string())),
        401 => Err(AuthError::SessionExpired),
        _ => {
            let msg = serde_json::from_str::<ErrorBody>(body)
                .map(|b| b.msg)
                .unwrap_or_else(|_| format!("request failed: {status}"));
            Err(AuthError::Rejected { msg })
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
