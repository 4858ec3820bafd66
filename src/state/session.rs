//! Token store for the current browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound request and every navigation decision reads the session
//! through a [`TokenStore`]; only the credential client writes to it. The
//! store is a cloneable handle over one shared [`KeyValueStorage`], so all
//! clones observe the same values.
//!
//! Writes are single synchronous steps, so a read never sees half of a login
//! or refresh.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_NAME_KEY: &str = "user_name";

/// Snapshot of the persisted authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    /// Authenticated iff a non-empty access token is present, regardless of
    /// refresh token.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// String key-value persistence backing the token store.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process storage for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// `window.localStorage`, looked up on every call.
///
/// A missing storage object is an environment failure: it is logged, reads
/// return nothing and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
    if storage.is_none() {
        log::error!("localStorage unavailable; session cannot be persisted");
    }
    storage
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// Shared handle to the persisted session.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}

impl TokenStore {
    pub fn new(backend: Arc<dyn KeyValueStorage>) -> Self {
        Self { backend }
    }

    /// Store backed by a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    pub fn get(&self) -> Session {
        Session {
            access_token: self.access_token(),
            refresh_token: self.backend.get(REFRESH_TOKEN_KEY),
            display_name: self.backend.get(USER_NAME_KEY),
        }
    }

    /// Current access token, read at call time. An empty value counts as none.
    pub fn access_token(&self) -> Option<String> {
        self.backend.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn set_tokens(&self, access: &str, refresh: &str) {
        self.backend.set(ACCESS_TOKEN_KEY, access);
        self.backend.set(REFRESH_TOKEN_KEY, refresh);
    }

    /// Replace the access token only; the refresh token is not rotated.
    pub fn set_access_token(&self, access: &str) {
        self.backend.set(ACCESS_TOKEN_KEY, access);
    }

    pub fn set_display_name(&self, name: &str) {
        self.backend.set(USER_NAME_KEY, name);
    }

    /// Remove all three keys. Safe to call on an empty store.
    pub fn clear(&self) {
        self.backend.remove(ACCESS_TOKEN_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
        self.backend.remove(USER_NAME_KEY);
    }
}
