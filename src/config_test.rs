use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_authkit_env() {
    unsafe {
        std::env::remove_var("AUTHKIT_BASE_URL");
        std::env::remove_var("AUTHKIT_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("AUTHKIT_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("AUTHKIT_VAULT_DIR");
    }
}

#[test]
fn from_env_requires_base_url() {
    unsafe { clear_authkit_env() };

    let err = AuthConfig::from_env().unwrap_err();
    assert!(matches!(err, AuthError::MissingBaseUrl { ref var } if var == "AUTHKIT_BASE_URL"));

    unsafe { clear_authkit_env() };
}

#[test]
fn from_env_defaults() {
    unsafe {
        clear_authkit_env();
        std::env::set_var("AUTHKIT_BASE_URL", "http://localhost:3000/");
    }

    let cfg = AuthConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://localhost:3000");
    assert_eq!(cfg.timeouts, HttpTimeouts::default());
    assert_eq!(cfg.vault_dir, None);

    unsafe { clear_authkit_env() };
}

#[test]
fn from_env_parses_overrides() {
    unsafe {
        clear_authkit_env();
        std::env::set_var("AUTHKIT_BASE_URL", "https://api.example.test");
        std::env::set_var("AUTHKIT_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("AUTHKIT_CONNECT_TIMEOUT_SECS", "7");
        std::env::set_var("AUTHKIT_VAULT_DIR", "/tmp/authkit-test");
    }

    let cfg = AuthConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://api.example.test");
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.vault_dir, Some(PathBuf::from("/tmp/authkit-test")));

    unsafe { clear_authkit_env() };
}

#[test]
fn from_env_ignores_unparseable_timeout() {
    unsafe {
        clear_authkit_env();
        std::env::set_var("AUTHKIT_BASE_URL", "http://localhost:3000");
        std::env::set_var("AUTHKIT_REQUEST_TIMEOUT_SECS", "not-a-number");
    }

    let cfg = AuthConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_authkit_env() };
}

#[test]
fn new_trims_trailing_slash() {
    let cfg = AuthConfig::new("http://localhost:3000/");
    assert_eq!(cfg.base_url, "http://localhost:3000");
}
