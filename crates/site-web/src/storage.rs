use site_core::{KeyValueStore, StorageError};
use web_sys as web;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, sandboxed iframes). Every call then reports `Unavailable`.
pub struct LocalStorage {
    inner: Option<web::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[storage] localStorage unavailable; preferences will not persist");
        }
        Self { inner }
    }

    fn backend(&self) -> Result<&web::Storage, StorageError> {
        self.inner
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.backend()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.backend()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}
