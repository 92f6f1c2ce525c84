//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's request/response payloads so serde
//! round-trips stay lossless. The session layer treats [`User`] as opaque:
//! it stores, persists, and returns it without inspecting the fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The server's user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// The authenticated user/token pair, as returned by all three auth
/// endpoints and as persisted by the vault.
///
/// Holding the pair in one struct is what enforces the session invariant:
/// a token is present exactly when a user is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user: User,
    pub token: String,
}

/// POST body for `/api/v1/auth/register`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST body for `/api/v1/auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// PATCH body for `/api/v1/auth/updateUser`. Absent fields are left
/// untouched by the server and are omitted from the request entirely.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ProfileUpdate {
    /// `true` when no field is set; callers can skip the request entirely.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.last_name.is_none() && self.location.is_none()
    }
}
