// src/lang/translator.rs
use super::persistence::LanguagePersistence;
use crate::core::config::Config;
use crate::core::constants::{DEFAULT_LANGUAGE, I18N_ATTRIBUTE};
use crate::dom::Document;
use crate::i18n::TranslationStore;
use crate::storage::PreferenceStorage;
use std::sync::Arc;

/// What one apply pass did. Diagnostic only; nothing here is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplySummary {
    pub language: String,
    /// Tagged elements that received a string.
    pub updated: usize,
    /// Tagged elements left as they were (unknown language or key).
    pub untouched: usize,
    pub persisted: bool,
}

/// Rewrites tagged elements from a [`TranslationStore`] and remembers the
/// language that was applied last.
#[derive(Debug, Clone)]
pub struct Translator<S> {
    store: Arc<TranslationStore>,
    persistence: LanguagePersistence<S>,
    attribute: String,
    default_language: String,
}

impl<S: PreferenceStorage> Translator<S> {
    pub fn new(store: impl Into<Arc<TranslationStore>>, storage: S) -> Self {
        Self {
            store: store.into(),
            persistence: LanguagePersistence::new(storage),
            attribute: I18N_ATTRIBUTE.into(),
            default_language: DEFAULT_LANGUAGE.into(),
        }
    }

    pub fn from_config(
        store: impl Into<Arc<TranslationStore>>,
        storage: S,
        config: &Config,
    ) -> Self {
        Self {
            store: store.into(),
            persistence: LanguagePersistence::with_key(storage, config.storage_key.clone()),
            attribute: config.attribute.clone(),
            default_language: config.default_language.clone(),
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    pub fn with_default_language(mut self, lang: impl Into<String>) -> Self {
        self.default_language = lang.into();
        self
    }

    /// Sets every tagged element that has a string for `lang` and leaves the
    /// rest alone, then stores `lang` as the preferred language. `lang` is
    /// not validated: an unknown code updates nothing but is still stored.
    pub fn apply_translations<D>(&mut self, doc: &mut D, lang: &str) -> ApplySummary
    where
        D: Document + ?Sized,
    {
        let table = self.store.table(lang);
        let mut updated = 0;
        let mut untouched = 0;

        doc.visit_tagged(&self.attribute, &mut |key, target| {
            match table.and_then(|t| t.get(key)) {
                Some(text) => {
                    target.set(text);
                    updated += 1;
                }
                None => untouched += 1,
            }
        });

        let persisted = self.persistence.save(lang);
        log::debug!(
            "Applied '{}': {} updated, {} untouched",
            lang,
            updated,
            untouched
        );

        ApplySummary {
            language: lang.to_string(),
            updated,
            untouched,
            persisted,
        }
    }

    /// Stored preference, or the default language when none is stored.
    pub fn preferred_language(&self) -> String {
        self.persistence
            .load()
            .unwrap_or_else(|| self.default_language.clone())
    }

    /// Page-load hook: applies the preferred language once.
    pub fn initialize<D>(&mut self, doc: &mut D) -> ApplySummary
    where
        D: Document + ?Sized,
    {
        let lang = self.preferred_language();
        self.apply_translations(doc, &lang)
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    pub fn into_storage(self) -> S {
        self.persistence.into_storage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, MemoryDocument};
    use crate::storage::MemoryStorage;

    fn page() -> MemoryDocument {
        MemoryDocument::new()
            .with(Element::new("span").with_attr("data-i18n", "nav_dashboard").with_text("Dashboard"))
            .with(Element::new("button").with_attr("data-i18n", "btn_capture").with_text("Capture Face"))
            .with(Element::new("span").with_attr("data-i18n", "not_a_key").with_text("keep me"))
            .with(Element::new("input").with_attr("data-i18n", "reg_name").with_attr("type", "text"))
            .with(Element::new("p").with_text("untagged"))
    }

    fn translator() -> Translator<MemoryStorage> {
        Translator::new(TranslationStore::builtin().unwrap(), MemoryStorage::new())
    }

    #[test]
    fn applies_known_keys_and_counts_the_rest() {
        let mut translator = translator();
        let mut doc = page();

        let summary = translator.apply_translations(&mut doc, "te");

        assert_eq!(summary.updated, 3);
        assert_eq!(summary.untouched, 1);
        assert!(summary.persisted);
        assert_eq!(doc.element(0).unwrap().text(), "డ్యాష్‌బోర్డ్");
        assert_eq!(doc.element(1).unwrap().text(), "ముఖాన్ని క్యాప్చర్ చేయండి");
        assert_eq!(doc.element(2).unwrap().text(), "keep me");
        assert_eq!(doc.element(3).unwrap().placeholder(), Some("పూర్తి పేరు"));
        assert_eq!(doc.element(3).unwrap().text(), "");
        assert_eq!(doc.element(4).unwrap().text(), "untagged");
    }

    #[test]
    fn unknown_language_updates_nothing_but_is_stored() {
        let mut translator = translator();
        let mut doc = page();
        let before = doc.clone();

        let summary = translator.apply_translations(&mut doc, "fr");

        assert_eq!(summary.updated, 0);
        assert_eq!(summary.untouched, 4);
        assert_eq!(doc, before);
        assert_eq!(translator.preferred_language(), "fr");
    }

    #[test]
    fn initialize_defaults_to_english() {
        let mut translator = translator();
        let mut doc = page();

        let summary = translator.initialize(&mut doc);

        assert_eq!(summary.language, "en");
        assert_eq!(translator.storage().writes(), 1);
    }

    #[test]
    fn initialize_uses_stored_preference() {
        let storage = MemoryStorage::new().with_item("preferred_lang", "te");
        let mut translator = Translator::new(TranslationStore::builtin().unwrap(), storage);
        let mut doc = page();

        assert_eq!(translator.initialize(&mut doc).language, "te");
        assert_eq!(doc.element(0).unwrap().text(), "డ్యాష్‌బోర్డ్");
    }

    #[test]
    fn config_controls_attribute_key_and_default() {
        let config = Config::from_toml_str(
            "[language]\ndefault = \"te\"\nattribute = \"data-t\"\nstorage_key = \"lang\"\n",
        )
        .unwrap();
        let mut translator =
            Translator::from_config(TranslationStore::builtin().unwrap(), MemoryStorage::new(), &config);
        let mut doc = MemoryDocument::new()
            .with(Element::new("h1").with_attr("data-t", "alert_title"))
            .with(Element::new("h2").with_attr("data-i18n", "alert_title"));

        translator.initialize(&mut doc);

        assert_eq!(doc.element(0).unwrap().text(), "సిస్టమ్ అలర్ట్‌లు");
        assert_eq!(doc.element(1).unwrap().text(), "");
        assert_eq!(
            translator.storage().get_item("lang").unwrap().as_deref(),
            Some("te")
        );
    }
}
