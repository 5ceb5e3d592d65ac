//! Session persistence
//!
//! The raw token and the derived user record live under two storage keys
//! but are always treated as one unit: written together, cleared together.
//! A half-written pair is never handed back to callers.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::codec::User;

/// Storage key for the raw bearer token
pub const TOKEN_KEY: &str = "authToken";

/// Storage key for the JSON-serialized user record
pub const USER_KEY: &str = "user";

/// Synchronous string key-value storage (the Web Storage shape)
///
/// Implementations must be total: failures are absorbed, never surfaced.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// In-process storage, used on the server and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.write() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.write() {
            items.remove(key);
        }
    }
}

/// Browser `localStorage`
///
/// Holds no handle of its own; the storage object is looked up on every
/// call so the type stays `Send + Sync`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!(key, "localStorage write rejected");
                }
            }
            None => tracing::warn!(key, "localStorage unavailable"),
        }
    }

    fn remove_item(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(key).is_err() {
                    tracing::warn!(key, "localStorage removal rejected");
                }
            }
            None => tracing::warn!(key, "localStorage unavailable"),
        }
    }
}

/// A persisted session: token plus the user it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// Token + user persistence on top of a [`SessionStorage`]
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn SessionStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Read the persisted session
    ///
    /// Returns `None` when nothing is stored. A partial or unreadable pair
    /// is cleared before returning `None`.
    pub fn get(&self) -> Option<StoredSession> {
        let token = self.storage.get_item(TOKEN_KEY);
        let user = self.storage.get_item(USER_KEY);

        match (token, user) {
            (None, None) => None,
            (Some(token), Some(user_json)) if !token.is_empty() => {
                match serde_json::from_str::<User>(&user_json) {
                    Ok(user) => Some(StoredSession { token, user }),
                    Err(e) => {
                        tracing::warn!(error = %e, "Stored user record is unreadable, clearing session");
                        self.clear();
                        None
                    }
                }
            }
            _ => {
                tracing::warn!("Stored session is incomplete, clearing session");
                self.clear();
                None
            }
        }
    }

    /// Persist a session, replacing any previous one
    pub fn set(&self, token: &str, user: &User) {
        // Token is written last so an interrupted write reads back as incomplete
        match serde_json::to_string(user) {
            Ok(user_json) => {
                self.storage.set_item(USER_KEY, &user_json);
                self.storage.set_item(TOKEN_KEY, token);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize user, session not persisted");
                self.clear();
            }
        }
    }

    /// Remove both keys
    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}
