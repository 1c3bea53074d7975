// src/storage/mod.rs
//! Durable key/value storage for the language preference, shaped like the
//! browser's `localStorage`.

pub mod file;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod local;

pub use file::FileStorage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

use crate::core::error::Result;
use std::collections::HashMap;

pub trait PreferenceStorage {
    /// `Ok(None)` when nothing is stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for &mut S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// Process-local storage; forgets everything on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// Number of `set_item` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.into(), value.into());
        self.writes += 1;
        Ok(())
    }
}

/// Boxes `storage` when it opened; otherwise falls back to a
/// [`MemoryStorage`] so translation still works and only the preference is
/// lost at the end of the session.
pub fn or_memory<S>(storage: Result<S>) -> Box<dyn PreferenceStorage>
where
    S: PreferenceStorage + 'static,
{
    match storage {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("Preference storage unavailable, keeping it in memory: {}", e);
            Box::new(MemoryStorage::new())
        }
    }
}
