//! Cached-session handling: the session store capability, the mount-time
//! guard and the logout/navigation actions.
//!
//! The store is a small trait so the guard logic can be exercised against an
//! in-memory fake instead of the browser's localStorage.

use wasm_bindgen::JsValue;

use crate::constants::{LOGIN_ROUTE, TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::models::CurrentUser;

/// The cached credential plus the profile it was issued for. Created by the
/// external login flow, read once at mount, destroyed at logout.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: CurrentUser,
}

/// Capability over the two string entries backing a session. Implemented for
/// browser localStorage in production and an in-memory map in tests.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `SessionStore` backed by `window.localStorage`.
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

impl BrowserSessionStore {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| JsValue::from_str("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// Mount-time guard. Returns the session when both cached entries are
/// present and the profile parses; `None` in every other case, which the
/// caller must treat as "redirect to login, do nothing else". A corrupt
/// profile is deliberately indistinguishable from an absent one.
pub fn load_session(store: &impl SessionStore) -> Option<Session> {
    let token = store.get(TOKEN_STORAGE_KEY)?;
    let raw_user = store.get(USER_STORAGE_KEY)?;

    match serde_json::from_str::<CurrentUser>(&raw_user) {
        Ok(user) => Some(Session { token, user }),
        Err(e) => {
            log::warn!("cached user profile is unreadable, treating session as absent: {}", e);
            None
        }
    }
}

/// Remove both session entries. Safe to call with no active session.
pub fn clear_session(store: &impl SessionStore) {
    store.remove(TOKEN_STORAGE_KEY);
    store.remove(USER_STORAGE_KEY);
}

/// Terminal action for a failed guard or an explicit logout.
pub fn navigate_to_login() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    window.location().set_href(LOGIN_ROUTE)
}

/// In-memory `SessionStore` used by the guard and logout tests.
#[cfg(test)]
pub mod testing {
    use super::SessionStore;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct InMemorySessionStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl InMemorySessionStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl SessionStore for InMemorySessionStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }
}
