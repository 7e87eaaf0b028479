//! Tab-scoped persistence of the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth context is the only writer. Authenticated fetch reads the token
//! through [`SessionStore::token`] and never writes.
//!
//! STORAGE FORMAT
//! ==============
//! A single JSON envelope `{"token", "user"}` under [`SESSION_KEY`], so the
//! token and profile are written by one `set` and can never be half-saved.
//! The older two-key layout ([`LEGACY_TOKEN_KEY`] + [`LEGACY_USER_KEY`]) is
//! still read once and migrated. Anything undecodable clears every key.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::net::types::User;

pub const SESSION_KEY: &str = "ctpn_session";
pub const LEGACY_TOKEN_KEY: &str = "jwt_token";
pub const LEGACY_USER_KEY: &str = "user_data";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("storage write failed for {key}: {reason}")]
    Storage { key: String, reason: String },
    #[error("session encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Bearer token plus the profile it was issued for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// String key-value backend for the session store.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    fn remove(&self, key: &str);
}

/// In-process storage for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().map_or(false, |entries| entries.contains_key(key))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().map_err(|_| SessionError::Storage {
            key: key.to_owned(),
            reason: "memory storage poisoned".to_owned(),
        })?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// `window.sessionStorage`: survives reloads, dies with the tab.
///
/// Outside the browser every read misses and every write is dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            let storage = browser_storage().ok_or_else(|| SessionError::Storage {
                key: key.to_owned(),
                reason: "sessionStorage unavailable".to_owned(),
            })?;
            storage.set_item(key, value).map_err(|e| SessionError::Storage {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Typed access to the persisted [`Session`].
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Store backed by the browser tab's `sessionStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserSessionStorage)
    }

    /// Persist `user` and `token` as one envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the envelope cannot be encoded or written. Nothing
    /// is left half-written in that case.
    pub fn save(&self, user: &User, token: &str) -> Result<(), SessionError> {
        let session = Session { token: token.to_owned(), user: user.clone() };
        let raw = serde_json::to_string(&session)?;
        self.storage.set(SESSION_KEY, &raw)?;
        self.remove_legacy();
        Ok(())
    }

    /// Restore the persisted session, if a valid one exists.
    ///
    /// Corrupt or partial data is cleared before returning `None`.
    pub fn load(&self) -> Option<Session> {
        if let Some(raw) = self.storage.get(SESSION_KEY) {
            return match serde_json::from_str::<Session>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("session: discarding undecodable session envelope: {e}");
                    self.clear();
                    None
                }
            };
        }
        self.load_legacy()
    }

    /// Bearer token of the persisted session, without decoding the profile.
    pub fn token(&self) -> Option<String> {
        if let Some(raw) = self.storage.get(SESSION_KEY) {
            #[derive(Deserialize)]
            struct TokenOnly {
                token: String,
            }
            return serde_json::from_str::<TokenOnly>(&raw).ok().map(|t| t.token);
        }
        match (self.storage.get(LEGACY_TOKEN_KEY), self.storage.get(LEGACY_USER_KEY)) {
            (Some(token), Some(_)) => Some(token),
            _ => None,
        }
    }

    /// Remove every session key. Never fails.
    pub fn clear(&self) {
        self.storage.remove(SESSION_KEY);
        self.remove_legacy();
    }

    fn remove_legacy(&self) {
        self.storage.remove(LEGACY_TOKEN_KEY);
        self.storage.remove(LEGACY_USER_KEY);
    }

    fn load_legacy(&self) -> Option<Session> {
        let token = self.storage.get(LEGACY_TOKEN_KEY);
        let user_raw = self.storage.get(LEGACY_USER_KEY);
        match (token, user_raw) {
            (None, None) => None,
            (Some(token), Some(user_raw)) => match serde_json::from_str::<User>(&user_raw) {
                Ok(user) => {
                    log::debug!("session: migrating legacy two-key session");
                    if let Err(e) = self.save(&user, &token) {
                        log::warn!("session: legacy migration write failed: {e}");
                    }
                    Some(Session { token, user })
                }
                Err(e) => {
                    log::warn!("session: discarding undecodable legacy profile: {e}");
                    self.clear();
                    None
                }
            },
            _ => {
                log::warn!("session: discarding partial legacy session");
                self.clear();
                None
            }
        }
    }
}
