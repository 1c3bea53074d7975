// src/storage/local.rs
use super::PreferenceStorage;
use crate::core::error::{AppError, Result};

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn from_window() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Storage("no window object".into()))?;
        let inner = window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("localStorage unavailable: {:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage disabled".into()))?;
        Ok(Self { inner })
    }
}

impl PreferenceStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.inner
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("getItem({}): {:?}", key, e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("setItem({}): {:?}", key, e)))
    }
}
