use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("no window object")]
    NoWindow,
    #[error("localStorage unavailable")]
    NoLocalStorage,
}

/// Browser local storage, if available. Always `Err` on non-wasm targets so
/// host tests never touch wasm-bindgen imports.
#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::NoWindow)?
        .local_storage()
        .map_err(|_| StorageError::NoLocalStorage)?
        .ok_or(StorageError::NoLocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage() -> Result<web_sys::Storage, StorageError> {
    Err(StorageError::NoWindow)
}

/// Best-effort read of a stored string value.
pub fn get_item(key: &str) -> Option<String> {
    local_storage().ok().and_then(|s| s.get_item(key).ok().flatten())
}

/// Best-effort write; storage failures (private mode, quota) are ignored.
pub fn set_item(key: &str, value: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
