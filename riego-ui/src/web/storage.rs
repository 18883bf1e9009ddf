//! Browser local storage as a session store.

use riego_core::session::SessionStore;
use riego_core::{Result, RiegoError};

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn unavailable() -> RiegoError {
        RiegoError::Storage("localStorage is not available".to_string())
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        Self::storage()
            .ok_or_else(Self::unavailable)?
            .set_item(key, value)
            .map_err(|e| RiegoError::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        Self::storage()
            .ok_or_else(Self::unavailable)?
            .remove_item(key)
            .map_err(|e| RiegoError::Storage(format!("{:?}", e)))
    }
}
