//! Session store — the orchestrating facade.
//!
//! DESIGN
//! ======
//! Owns the injected [`AuthApi`] and [`SessionVault`] ports plus the
//! in-memory [`SessionState`]. Each operation runs one lifecycle against
//! the state machine and persists the session on success. Persistence
//! failures on the success path are logged and swallowed; the only path
//! that clears durable storage is a 401, handled inside the HTTP client.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::net::api::{AuthApi, HttpAuthClient};
use crate::net::types::{LoginCredentials, ProfileUpdate, RegisterCredentials, User, UserSession};
use crate::state::{AuthOp, SessionState};
use crate::vault::{FileVault, SessionVault};

pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    vault: SessionVault,
    state: SessionState,
}

impl SessionStore {
    /// Wire the real HTTP client and a file vault from config, then hydrate.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the HTTP client cannot be built or no
    /// vault directory can be resolved.
    pub fn new(config: &AuthConfig) -> Result<Self, AuthError> {
        let dir = match &config.vault_dir {
            Some(dir) => dir.clone(),
            None => FileVault::default_dir()?,
        };
        let vault = SessionVault::new(Arc::new(FileVault::new(dir)));
        let api = Arc::new(HttpAuthClient::new(config, vault.clone())?);
        Ok(Self::with_parts(api, vault))
    }

    /// Inject both ports (tests, embedders) and hydrate from the vault.
    #[must_use]
    pub fn with_parts(api: Arc<dyn AuthApi>, vault: SessionVault) -> Self {
        let state = SessionState::with_session(vault.load());
        Self { api, vault, state }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.state.token()
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns the operation's [`AuthError`]; the same failure is also
    /// reflected in the state's alert for UI callers.
    pub async fn register(&mut self, credentials: &RegisterCredentials) -> Result<(), AuthError> {
        self.state.begin(AuthOp::Register);
        let result = self.api.register(credentials).await;
        self.finish(AuthOp::Register, result)
    }

    /// Log in with existing credentials.
    ///
    /// # Errors
    ///
    /// Same contract as [`SessionStore::register`].
    pub async fn login(&mut self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        self.state.begin(AuthOp::Login);
        let result = self.api.login(credentials).await;
        self.finish(AuthOp::Login, result)
    }

    /// Update the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without mutating state when
    /// no session is present; otherwise same contract as
    /// [`SessionStore::register`].
    pub async fn update(&mut self, fields: &ProfileUpdate) -> Result<(), AuthError> {
        let Some(token) = self.state.token().map(str::to_owned) else {
            return Err(AuthError::NotAuthenticated);
        };
        self.state.begin(AuthOp::Update);
        let result = self.api.update(fields, &token).await;
        self.finish(AuthOp::Update, result)
    }

    /// Clear the in-memory session. Durable storage is left untouched;
    /// callers wanting a durable logout clear the vault themselves.
    pub fn logout(&mut self) {
        self.state.logout();
        info!("session: logged out");
    }

    pub fn dismiss_alert(&mut self) {
        self.state.dismiss_alert();
    }

    pub fn alert_missing_values(&mut self) {
        self.state.alert_missing_values();
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    fn finish(&mut self, op: AuthOp, result: Result<UserSession, AuthError>) -> Result<(), AuthError> {
        match result {
            Ok(session) => {
                if let Err(e) = self.vault.save(&session) {
                    warn!(?op, error = %e, "session persist failed");
                }
                info!(?op, "auth operation succeeded");
                self.state.succeed(op, session);
                Ok(())
            }
            Err(e) => {
                info!(?op, error = %e, "auth operation failed");
                self.state.fail(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
