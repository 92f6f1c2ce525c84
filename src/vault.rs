//! Durable session storage port.
//!
//! DESIGN
//! ======
//! The store never talks to the filesystem directly; it goes through the
//! object-safe [`Vault`] port so tests and embedders can inject their own
//! backend. [`SessionVault`] layers the fixed `user`/`token` keys and the
//! both-or-nothing rule on top of the raw key-value surface: a session is
//! hydrated only when both keys are present and the user record parses.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::error::StorageError;
use crate::net::types::{User, UserSession};

/// Durable storage key for the serialized user record.
pub const KEY_USER: &str = "user";
/// Durable storage key for the raw bearer token.
pub const KEY_TOKEN: &str = "token";

// =============================================================================
// VAULT PORT
// =============================================================================

/// Key-value persistence port. String keys, string values, all fallible.
pub trait Vault: Send + Sync {
    /// Read the value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend delete fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// MEMORY VAULT
// =============================================================================

/// In-process vault for tests and ephemeral embedders.
#[derive(Default)]
pub struct MemoryVault {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Vault for MemoryVault {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE VAULT
// =============================================================================

/// One file per key under a directory. The localStorage of the desktop.
pub struct FileVault {
    dir: PathBuf,
}

impl FileVault {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Resolve the platform data directory for the default vault location.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoProjectDirs`] when the platform provides
    /// no home/data directory (headless CI containers, typically).
    pub fn default_dir() -> Result<PathBuf, StorageError> {
        let dirs = directories::ProjectDirs::from("", "", "authkit").ok_or(StorageError::NoProjectDirs)?;
        Ok(dirs.data_dir().to_path_buf())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Vault for FileVault {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// SESSION VAULT
// =============================================================================

/// Typed session layer over the raw port. Cheap to clone; the HTTP client
/// and the store share one backend.
#[derive(Clone)]
pub struct SessionVault {
    inner: Arc<dyn Vault>,
}

impl SessionVault {
    #[must_use]
    pub fn new(inner: Arc<dyn Vault>) -> Self {
        Self { inner }
    }

    /// Hydrate the persisted session. Yields `None` unless both keys are
    /// present and the user record parses; a lone key or corrupt user JSON
    /// hydrates empty rather than erroring.
    #[must_use]
    pub fn load(&self) -> Option<UserSession> {
        let user_raw = match self.inner.get(KEY_USER) {
            Ok(value) => value?,
            Err(e) => {
                warn!(error = %e, "vault: user read failed, hydrating empty");
                return None;
            }
        };
        let token = match self.inner.get(KEY_TOKEN) {
            Ok(value) => value?,
            Err(e) => {
                warn!(error = %e, "vault: token read failed, hydrating empty");
                return None;
            }
        };
        match serde_json::from_str::<User>(&user_raw) {
            Ok(user) => Some(UserSession { user, token }),
            Err(e) => {
                debug!(error = %e, "vault: persisted user record corrupt, hydrating empty");
                None
            }
        }
    }

    /// Persist both keys of the session.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or either write fails.
    pub fn save(&self, session: &UserSession) -> Result<(), StorageError> {
        let user_raw = serde_json::to_string(&session.user)?;
        self.inner.set(KEY_USER, &user_raw)?;
        self.inner.set(KEY_TOKEN, &session.token)?;
        Ok(())
    }

    /// Remove both keys.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if either delete fails.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.inner.remove(KEY_USER)?;
        self.inner.remove(KEY_TOKEN)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "vault_test.rs"]
mod tests;
