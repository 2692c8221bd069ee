//! Token persistence.
//!
//! Client-side (hydrate): [`LocalTokenStore`] reads and writes
//! `window.localStorage`. Server-side (SSR) there is no storage, so it reads
//! as empty and writes are dropped.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures (private mode, quota) are logged and otherwise ignored:
//! a token that cannot be saved just means the user signs in again.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Synchronous key-value slot for one token.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    /// Remove the token. Removing an absent token is a no-op.
    fn delete(&self);
}

/// Token slot backed by the browser's `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::storage() else {
                log::warn!("localStorage unavailable; session token not saved");
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("failed to write session token to localStorage");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn delete(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if storage.remove_item(&self.key).is_err() {
                    log::warn!("failed to remove session token from localStorage");
                }
            }
        }
    }
}

/// In-process token slot for SSR and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `token` already stored.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn delete(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}
