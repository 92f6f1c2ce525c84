use super::*;

fn sample_session() -> UserSession {
    UserSession {
        user: User {
            name: "ada".into(),
            email: "ada@example.test".into(),
            last_name: Some("lovelace".into()),
            location: None,
        },
        token: "tok-1".into(),
    }
}

// =============================================================================
// MemoryVault
// =============================================================================

#[test]
fn memory_vault_get_absent() {
    let vault = MemoryVault::new();
    assert_eq!(vault.get("user").unwrap(), None);
}

#[test]
fn memory_vault_set_get_remove() {
    let vault = MemoryVault::new();
    vault.set("token", "tok-1").unwrap();
    assert_eq!(vault.get("token").unwrap().as_deref(), Some("tok-1"));
    vault.remove("token").unwrap();
    assert_eq!(vault.get("token").unwrap(), None);
}

#[test]
fn memory_vault_set_overwrites() {
    let vault = MemoryVault::new();
    vault.set("token", "tok-1").unwrap();
    vault.set("token", "tok-2").unwrap();
    assert_eq!(vault.get("token").unwrap().as_deref(), Some("tok-2"));
}

#[test]
fn memory_vault_remove_absent_is_ok() {
    let vault = MemoryVault::new();
    vault.remove("user").unwrap();
}

// =============================================================================
// FileVault
// =============================================================================

#[test]
fn file_vault_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let vault = FileVault::new(dir.path().join("vault"));
    vault.set("token", "tok-1").unwrap();
    assert_eq!(vault.get("token").unwrap().as_deref(), Some("tok-1"));
    vault.remove("token").unwrap();
    assert_eq!(vault.get("token").unwrap(), None);
}

#[test]
fn file_vault_get_from_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let vault = FileVault::new(dir.path().join("never-created"));
    assert_eq!(vault.get("user").unwrap(), None);
}

#[test]
fn file_vault_remove_absent_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let vault = FileVault::new(dir.path().to_path_buf());
    vault.remove("user").unwrap();
}

// =============================================================================
// SessionVault
// =============================================================================

#[test]
fn session_vault_load_empty() {
    let vault = SessionVault::new(std::sync::Arc::new(MemoryVault::new()));
    assert_eq!(vault.load(), None);
}

#[test]
fn session_vault_save_then_load() {
    let vault = SessionVault::new(std::sync::Arc::new(MemoryVault::new()));
    vault.save(&sample_session()).unwrap();
    assert_eq!(vault.load(), Some(sample_session()));
}

#[test]
fn session_vault_lone_token_hydrates_empty() {
    let backend = std::sync::Arc::new(MemoryVault::new());
    backend.set(KEY_TOKEN, "tok-1").unwrap();
    let vault = SessionVault::new(backend);
    assert_eq!(vault.load(), None);
}

#[test]
fn session_vault_lone_user_hydrates_empty() {
    let backend = std::sync::Arc::new(MemoryVault::new());
    backend
        .set(KEY_USER, &serde_json::to_string(&sample_session().user).unwrap())
        .unwrap();
    let vault = SessionVault::new(backend);
    assert_eq!(vault.load(), None);
}

#[test]
fn session_vault_corrupt_user_hydrates_empty() {
    let backend = std::sync::Arc::new(MemoryVault::new());
    backend.set(KEY_USER, "not json").unwrap();
    backend.set(KEY_TOKEN, "tok-1").unwrap();
    let vault = SessionVault::new(backend);
    assert_eq!(vault.load(), None);
}

#[test]
fn session_vault_clear_removes_both_keys() {
    let backend = std::sync::Arc::new(MemoryVault::new());
    let vault = SessionVault::new(backend.clone());
    vault.save(&sample_session()).unwrap();
    vault.clear().unwrap();
    assert_eq!(backend.get(KEY_USER).unwrap(), None);
    assert_eq!(backend.get(KEY_TOKEN).unwrap(), None);
}

#[test]
fn session_vault_round_trips_through_file_backend() {
    let dir = tempfile::tempdir().unwrap();
    let vault = SessionVault::new(std::sync::Arc::new(FileVault::new(dir.path().to_path_buf())));
    vault.save(&sample_session()).unwrap();
    assert_eq!(vault.load(), Some(sample_session()));
}
