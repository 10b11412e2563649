//! Session-guard properties: the view only activates on a complete,
//! parseable cached session, and logout returns the store to the
//! guard-fails state.

use crate::constants::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::session::testing::InMemorySessionStore;
use crate::session::{clear_session, load_session, SessionStore};

const VALID_PROFILE: &str = r#"{
    "id": 42,
    "username": "STU001",
    "email": "ada@example.edu",
    "role": "student",
    "full_name": "Ada Lovelace"
}"#;

fn seeded_store() -> InMemorySessionStore {
    let store = InMemorySessionStore::new();
    store.set(TOKEN_STORAGE_KEY, "tok-123");
    store.set(USER_STORAGE_KEY, VALID_PROFILE);
    store
}

#[test]
fn guard_fails_when_token_missing() {
    let store = InMemorySessionStore::new();
    store.set(USER_STORAGE_KEY, VALID_PROFILE);
    assert_eq!(load_session(&store), None);
}

#[test]
fn guard_fails_when_profile_missing() {
    let store = InMemorySessionStore::new();
    store.set(TOKEN_STORAGE_KEY, "tok-123");
    assert_eq!(load_session(&store), None);
}

#[test]
fn corrupt_profile_is_treated_as_absent_session() {
    let store = seeded_store();
    store.set(USER_STORAGE_KEY, "definitely-not-json{{");
    assert_eq!(load_session(&store), None);
}

#[test]
fn valid_session_exposes_token_and_identity() {
    let session = load_session(&seeded_store()).expect("guard should pass");
    assert_eq!(session.token, "tok-123");
    assert_eq!(session.user.username, "STU001");
    assert_eq!(session.user.full_name, "Ada Lovelace");
}

#[test]
fn logout_clears_both_keys() {
    let store = seeded_store();
    clear_session(&store);
    assert_eq!(store.get(TOKEN_STORAGE_KEY), None);
    assert_eq!(store.get(USER_STORAGE_KEY), None);
}

// Simulated reload after logout: the next guard evaluation fails exactly
// like the never-logged-in case.
#[test]
fn guard_redirects_again_after_logout() {
    let store = seeded_store();
    assert!(load_session(&store).is_some());
    clear_session(&store);
    assert_eq!(load_session(&store), None);
}

// Logout is idempotent: clearing an already-empty store is a no-op.
#[test]
fn logout_with_no_active_session_is_safe() {
    let store = InMemorySessionStore::new();
    clear_session(&store);
    assert_eq!(load_session(&store), None);
}
