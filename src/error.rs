//! Error types for auth operations and the storage port.

// =============================================================================
// AUTH ERROR
// =============================================================================

/// Errors produced by auth operations.
///
/// The `Display` form of each variant is the text shown in the session
/// alert when the operation fails, so `Rejected` carries the server's
/// flat `msg` string verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The server rejected the request with a message (validation failure,
    /// wrong credentials, duplicate email, ...).
    #[error("{msg}")]
    Rejected { msg: String },

    /// The server answered 401. The persisted session has already been
    /// cleared by the time this error is observed.
    #[error("Session expired. Please log in again.")]
    SessionExpired,

    /// An authenticated operation was attempted with no session present.
    #[error("not authenticated: log in first")]
    NotAuthenticated,

    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The success response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The required base URL environment variable is not set.
    #[error("missing base URL: env var {var} not set")]
    MissingBaseUrl { var: String },

    /// The storage port could not be set up (construction-time only;
    /// storage failures during operations are logged, never surfaced).
    #[error("storage unavailable: {0}")]
    Storage(#[from] StorageError),
}

// =============================================================================
// STORAGE ERROR
// =============================================================================

/// Errors produced by the key-value storage port.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    /// No platform data directory could be resolved for the file vault.
    #[error("no platform data directory available")]
    NoProjectDirs,

    /// The in-memory vault's lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}
