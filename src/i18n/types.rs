// src/i18n/types.rs
use crate::i18n::error::TranslationError;
use std::collections::BTreeMap;

/// Key → display string for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: BTreeMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a flat JSON object of string values. Entries with an empty
    /// display string are dropped, so they behave like missing keys.
    pub fn from_json(lang: &str, json: &str) -> Result<Self, TranslationError> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json).map_err(|e| {
            TranslationError::LoadError(format!("Language pack '{}': {}", lang, e))
        })?;

        let mut table = Self::new();
        for (key, value) in raw {
            if value.is_empty() {
                log::debug!("Language pack '{}': empty entry '{}' skipped", lang, key);
                continue;
            }
            table.entries.insert(key, value);
        }
        Ok(table)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.entries.insert(key.into(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}
