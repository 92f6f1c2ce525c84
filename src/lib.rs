//! Client-side auth session library.
//!
//! DESIGN
//! ======
//! `authkit` wraps a REST auth API (register, login, profile update) in a
//! session store with durable local persistence. The store owns two injected
//! ports: an [`net::api::AuthApi`] implementation for the HTTP calls and a
//! [`vault::SessionVault`] for the persisted user/token pair. Any 401 from
//! the API clears the persisted session; successful operations persist it.
//!
//! The in-memory session state ([`state::SessionState`]) carries the UI
//! feedback flags (loading, edit, alert) alongside the authenticated pair,
//! so callers can render directly from the store after each operation.

pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod store;
pub mod vault;

pub use config::AuthConfig;
pub use error::{AuthError, StorageError};
pub use net::api::{AuthApi, HttpAuthClient};
pub use net::types::{LoginCredentials, ProfileUpdate, RegisterCredentials, User, UserSession};
pub use state::{Alert, AlertKind, AuthOp, SessionState};
pub use store::SessionStore;
pub use vault::{FileVault, MemoryVault, SessionVault, Vault};
