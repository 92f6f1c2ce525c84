//! Session state machine.
//!
//! DESIGN
//! ======
//! The pure state slice: the authenticated pair plus the UI feedback flags.
//! Each auth operation runs one lifecycle — `begin`, then `succeed` or
//! `fail` — and the transitions here are the only writers of the flags.
//! Keeping this free of IO lets every transition be tested with plain
//! `#[test]` functions.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::error::AuthError;
use crate::net::types::{User, UserSession};

pub const MISSING_VALUES_ALERT: &str = "Please provide all the values!";

// =============================================================================
// ALERT
// =============================================================================

/// Severity of the transient feedback message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    #[default]
    None,
}

/// Transient UI feedback message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alert {
    pub show: bool,
    pub text: String,
    pub kind: AlertKind,
}

impl Alert {
    fn success(text: impl Into<String>) -> Self {
        Self { show: true, text: text.into(), kind: AlertKind::Success }
    }

    fn error(text: impl Into<String>) -> Self {
        Self { show: true, text: text.into(), kind: AlertKind::Error }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// The three auth operations sharing the begin/succeed/fail lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOp {
    Register,
    Login,
    Update,
}

impl AuthOp {
    fn success_text(self) -> &'static str {
        match self {
            Self::Register => "User registered successfully! Redirecting..",
            Self::Login => "User logged in successfully! Redirecting..",
            Self::Update => "User edited successfully! Redirecting..",
        }
    }
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// The session slice: authenticated pair + feedback flags.
///
/// `session` being a single `Option` is the invariant: user and token are
/// set together and cleared together, there is no state where one exists
/// without the other.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<UserSession>,
    pub is_loading: bool,
    pub is_edit: bool,
    pub alert: Alert,
}

impl SessionState {
    /// Start from a hydrated session (or none).
    #[must_use]
    pub fn with_session(session: Option<UserSession>) -> Self {
        Self { session, ..Self::default() }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Mark an operation started: loading on, and the edit flag for update.
    pub fn begin(&mut self, op: AuthOp) {
        self.is_loading = true;
        if op == AuthOp::Update {
            self.is_edit = true;
        }
    }

    /// Apply a successful operation: install the session, success alert.
    pub fn succeed(&mut self, op: AuthOp, session: UserSession) {
        self.is_loading = false;
        self.is_edit = false;
        self.session = Some(session);
        self.alert = Alert::success(op.success_text());
    }

    /// Apply a failed operation: error alert from the error's display form,
    /// and session teardown when the failure is authorization expiry.
    pub fn fail(&mut self, error: &AuthError) {
        self.is_loading = false;
        self.is_edit = false;
        if matches!(error, AuthError::SessionExpired) {
            self.session = None;
        }
        self.alert = Alert::error(error.to_string());
    }

    /// Clear the in-memory session. Does not touch the alert or storage.
    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Reset the alert triple.
    pub fn dismiss_alert(&mut self) {
        self.alert = Alert::default();
    }

    /// The fixed validation alert for form submissions with blank fields.
    pub fn alert_missing_values(&mut self) {
        self.alert = Alert::error(MISSING_VALUES_ALERT);
    }
}
