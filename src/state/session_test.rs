use super::*;
use crate::net::types::Role;

fn user(role: Role) -> User {
    User {
        id: Some(7),
        full_name: "Nguyen Thanh Hai".to_owned(),
        email: "member1@ctpn.org".to_owned(),
        role,
        phone: Some("0901234573".to_owned()),
        verified: true,
    }
}

fn store() -> (MemoryStorage, SessionStore) {
    let storage = MemoryStorage::new();
    (storage.clone(), SessionStore::new(storage))
}

/// Storage that refuses every write.
struct ReadOnlyStorage;

impl SessionStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), SessionError> {
        Err(SessionError::Storage { key: key.to_owned(), reason: "quota exceeded".to_owned() })
    }

    fn remove(&self, _key: &str) {}
}

// =============================================================
// save / load
// =============================================================

#[test]
fn save_then_load_returns_same_session() {
    let (_, store) = store();
    store.save(&user(Role::Member), "abc123").unwrap();

    let session = store.load().unwrap();
    assert_eq!(session.token, "abc123");
    assert_eq!(session.user, user(Role::Member));
}

#[test]
fn save_writes_single_envelope_key() {
    let (storage, store) = store();
    store.save(&user(Role::Admin), "t").unwrap();

    assert!(storage.contains(SESSION_KEY));
    assert!(!storage.contains(LEGACY_TOKEN_KEY));
    assert!(!storage.contains(LEGACY_USER_KEY));
}

#[test]
fn load_on_empty_storage_is_none() {
    let (_, store) = store();
    assert!(store.load().is_none());
}

#[test]
fn save_failure_leaves_nothing_behind() {
    let store = SessionStore::new(ReadOnlyStorage);
    let err = store.save(&user(Role::Member), "t").unwrap_err();
    assert!(matches!(err, SessionError::Storage { .. }));
    assert!(store.load().is_none());
}

// =============================================================
// Corruption recovery
// =============================================================

#[test]
fn invalid_legacy_user_json_clears_both_keys() {
    let (storage, store) = store();
    storage.set(LEGACY_TOKEN_KEY, "abc123").unwrap();
    storage.set(LEGACY_USER_KEY, "{not json").unwrap();

    assert!(store.load().is_none());
    assert!(!storage.contains(LEGACY_TOKEN_KEY));
    assert!(!storage.contains(LEGACY_USER_KEY));
}

#[test]
fn invalid_envelope_is_cleared() {
    let (storage, store) = store();
    storage.set(SESSION_KEY, "[]").unwrap();

    assert!(store.load().is_none());
    assert!(!storage.contains(SESSION_KEY));
}

#[test]
fn unknown_role_is_treated_as_corruption() {
    let (storage, store) = store();
    let raw = serde_json::json!({
        "token": "t",
        "user": { "fullName": "X", "email": "x@y.z", "role": "ROOT" }
    });
    storage.set(SESSION_KEY, &raw.to_string()).unwrap();

    assert!(store.load().is_none());
    assert!(!storage.contains(SESSION_KEY));
}

#[test]
fn lone_legacy_token_is_treated_as_partial_write() {
    let (storage, store) = store();
    storage.set(LEGACY_TOKEN_KEY, "abc123").unwrap();

    assert!(store.load().is_none());
    assert!(!storage.contains(LEGACY_TOKEN_KEY));
}

#[test]
fn lone_legacy_user_is_treated_as_partial_write() {
    let (storage, store) = store();
    let raw = serde_json::to_string(&user(Role::Member)).unwrap();
    storage.set(LEGACY_USER_KEY, &raw).unwrap();

    assert!(store.load().is_none());
    assert!(!storage.contains(LEGACY_USER_KEY));
}

// =============================================================
// Legacy migration
// =============================================================

#[test]
fn valid_legacy_session_is_migrated_to_envelope() {
    let (storage, store) = store();
    storage.set(LEGACY_TOKEN_KEY, "legacy-token").unwrap();
    storage
        .set(LEGACY_USER_KEY, r#"{"fullName":"Le Minh Tuan","email":"staff@ctpn.org","role":"staff"}"#)
        .unwrap();

    let session = store.load().unwrap();
    assert_eq!(session.token, "legacy-token");
    assert_eq!(session.user.role, Role::Staff);
    assert!(storage.contains(SESSION_KEY));
    assert!(!storage.contains(LEGACY_TOKEN_KEY));
    assert!(!storage.contains(LEGACY_USER_KEY));
    assert_eq!(store.load(), Some(session));
}

// =============================================================
// token / clear
// =============================================================

#[test]
fn token_reads_envelope_token() {
    let (_, store) = store();
    store.save(&user(Role::Member), "abc123").unwrap();
    assert_eq!(store.token().as_deref(), Some("abc123"));
}

#[test]
fn token_is_none_without_session() {
    let (_, store) = store();
    assert_eq!(store.token(), None);
}

#[test]
fn clear_removes_every_key_and_is_repeatable() {
    let (storage, store) = store();
    store.save(&user(Role::Member), "t").unwrap();
    storage.set(LEGACY_TOKEN_KEY, "stale").unwrap();

    store.clear();
    store.clear();

    assert!(!storage.contains(SESSION_KEY));
    assert!(!storage.contains(LEGACY_TOKEN_KEY));
    assert!(store.load().is_none());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_the_browser() {
    let store = SessionStore::browser();
    store.save(&user(Role::Member), "t").unwrap();
    assert!(store.load().is_none());
}
