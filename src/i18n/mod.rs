// src/i18n/mod.rs
pub mod coverage;
pub mod error;
pub mod types;

pub use coverage::{CoverageReport, LanguageCoverage};
pub use error::TranslationError;
pub use types::TranslationTable;

use rust_embed::RustEmbed;
use std::collections::BTreeMap;

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
struct Langs;

/// Immutable language → table mapping. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    tables: BTreeMap<String, TranslationTable>,
}

impl TranslationStore {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Every pack embedded under `src/i18n/langs/`.
    pub fn builtin() -> Result<Self, TranslationError> {
        let mut builder = Self::builder();
        for lang in Self::builtin_languages() {
            builder = builder.with_table(lang.clone(), Self::builtin_pack(&lang)?);
        }
        Ok(builder.build())
    }

    pub fn builtin_languages() -> Vec<String> {
        Langs::iter()
            .filter_map(|f| f.strip_suffix(".json").map(str::to_lowercase))
            .collect()
    }

    pub fn builtin_pack(lang: &str) -> Result<TranslationTable, TranslationError> {
        let filename = format!("{}.json", lang.to_lowercase());
        let file = Langs::get(&filename)
            .ok_or_else(|| TranslationError::UnknownPack(lang.to_string()))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| TranslationError::LoadError(format!("{}: {}", filename, e)))?;
        TranslationTable::from_json(lang, content)
    }

    /// `None` for an unknown language or key; never an error.
    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.tables.get(lang)?.get(key)
    }

    pub fn table(&self, lang: &str) -> Option<&TranslationTable> {
        self.tables.get(lang)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Language codes in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn coverage_report(&self) -> CoverageReport {
        CoverageReport::from_tables(&self.tables)
    }
}

#[derive(Debug, Default)]
pub struct StoreBuilder {
    tables: BTreeMap<String, TranslationTable>,
}

impl StoreBuilder {
    /// A later table for the same language replaces the earlier one.
    pub fn with_table(mut self, lang: impl Into<String>, table: TranslationTable) -> Self {
        self.tables.insert(lang.into(), table);
        self
    }

    pub fn with_json(self, lang: &str, json: &str) -> Result<Self, TranslationError> {
        let table = TranslationTable::from_json(lang, json)?;
        Ok(self.with_table(lang, table))
    }

    pub fn build(self) -> TranslationStore {
        TranslationStore {
            tables: self.tables,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_english_and_telugu() {
        let store = TranslationStore::builtin().unwrap();
        assert_eq!(store.languages().collect::<Vec<_>>(), ["en", "te"]);
        assert_eq!(store.get("en", "nav_dashboard"), Some("Dashboard"));
        assert_eq!(store.get("te", "nav_dashboard"), Some("డ్యాష్‌బోర్డ్"));
        assert_eq!(store.get("te", "alert_action"), Some("చర్య"));
    }

    #[test]
    fn unknown_language_or_key_is_absent() {
        let store = TranslationStore::builtin().unwrap();
        assert_eq!(store.get("fr", "nav_dashboard"), None);
        assert_eq!(store.get("en", "nav_unknown"), None);
        assert!(!store.has_language("fr"));
    }

    #[test]
    fn builtin_packs_share_one_key_set() {
        let store = TranslationStore::builtin().unwrap();
        let report = store.coverage_report();
        assert!(report.is_complete(), "missing keys: {:?}", report);
        assert_eq!(store.table("en").map(TranslationTable::len), Some(41));
    }

    #[test]
    fn unknown_pack_is_an_error() {
        let err = TranslationStore::builtin_pack("xx").unwrap_err();
        assert!(matches!(err, TranslationError::UnknownPack(ref l) if l == "xx"));
    }

    #[test]
    fn builder_accepts_extra_packs() {
        let store = TranslationStore::builder()
            .with_table("en", TranslationStore::builtin_pack("en").unwrap())
            .with_json("hi", r#"{"nav_dashboard": "डैशबोर्ड"}"#)
            .unwrap()
            .build();
        assert_eq!(store.get("hi", "nav_dashboard"), Some("डैशबोर्ड"));
        assert_eq!(store.get("hi", "nav_alerts"), None);
        assert_eq!(store.get("en", "nav_alerts"), Some("Alerts"));
    }
}
