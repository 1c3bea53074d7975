// src/lang/persistence.rs
use crate::core::constants::PREFERENCE_KEY;
use crate::storage::PreferenceStorage;

/// Reads and writes the preferred language. Storage failures are logged and
/// never reach the caller: a failed read means "no preference".
#[derive(Debug, Clone)]
pub struct LanguagePersistence<S> {
    storage: S,
    key: String,
}

impl<S: PreferenceStorage> LanguagePersistence<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, PREFERENCE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// An empty stored value counts as absent.
    pub fn load(&self) -> Option<String> {
        match self.storage.get_item(&self.key) {
            Ok(value) => value.filter(|lang| !lang.is_empty()),
            Err(e) => {
                log::warn!("Failed to read language preference: {}", e);
                None
            }
        }
    }

    pub fn save(&mut self, lang: &str) -> bool {
        match self.storage.set_item(&self.key, lang) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to save language preference: {}", e);
                false
            }
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
