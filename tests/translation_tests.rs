// tests/translation_tests.rs
use attendance_i18n::{
    or_memory, AppError, Element, FileStorage, HtmlDocument, MemoryDocument, MemoryStorage,
    PreferenceStorage, TranslationStore, Translator,
};

const KEYS: &[&str] = &[
    "nav_attendance",
    "nav_dashboard",
    "home_title",
    "dash_anomalies",
    "status_verifying",
    "alert_risk",
];

fn tagged_page() -> MemoryDocument {
    let mut doc: MemoryDocument = KEYS
        .iter()
        .map(|key| Element::new("span").with_attr("data-i18n", *key).with_text("initial"))
        .collect();
    doc.push(Element::new("span").with_attr("data-i18n", "no_such_key").with_text("initial"));
    doc.push(Element::new("input").with_attr("data-i18n", "reg_username").with_attr("type", "text"));
    doc
}

fn translator(storage: MemoryStorage) -> Translator<MemoryStorage> {
    Translator::new(TranslationStore::builtin().unwrap(), storage)
}

#[test]
fn every_tagged_element_matches_the_store_or_keeps_its_text() {
    let store = TranslationStore::builtin().unwrap();
    for lang in ["en", "te", "fr"] {
        let mut doc = tagged_page();
        let before = doc.clone();
        translator(MemoryStorage::new()).apply_translations(&mut doc, lang);

        for (after, before) in doc.elements().iter().zip(before.elements()) {
            let key = after.attribute("data-i18n").unwrap();
            let (shown, previous) = if after.tag() == "input" {
                (after.placeholder(), before.placeholder())
            } else {
                (Some(after.text()), Some(before.text()))
            };
            match store.get(lang, key) {
                Some(expected) => assert_eq!(shown, Some(expected), "{}/{}", lang, key),
                None => assert_eq!(shown, previous, "{}/{} should be untouched", lang, key),
            }
        }
    }
}

#[test]
fn nav_dashboard_scenario() {
    let mut translator = translator(MemoryStorage::new());
    let mut doc = MemoryDocument::new()
        .with(Element::new("span").with_attr("data-i18n", "nav_dashboard").with_text("Dashboard"));

    translator.apply_translations(&mut doc, "te");
    assert_eq!(doc.element(0).unwrap().text(), "డ్యాష్‌బోర్డ్");

    translator.apply_translations(&mut doc, "en");
    assert_eq!(doc.element(0).unwrap().text(), "Dashboard");

    translator.apply_translations(&mut doc, "te");
    translator.apply_translations(&mut doc, "fr");
    assert_eq!(doc.element(0).unwrap().text(), "డ్యాష్‌బోర్డ్");
}

#[test]
fn applying_twice_changes_nothing() {
    let mut translator = translator(MemoryStorage::new());
    let mut doc = tagged_page();

    let first = translator.apply_translations(&mut doc, "te");
    let after_first = doc.clone();
    let stored_first = translator.storage().get_item("preferred_lang").unwrap();

    let second = translator.apply_translations(&mut doc, "te");

    assert_eq!(doc, after_first);
    assert_eq!(first, second);
    assert_eq!(translator.storage().get_item("preferred_lang").unwrap(), stored_first);
}

#[test]
fn page_load_without_preference_equals_explicit_english() {
    let mut loaded = tagged_page();
    let mut explicit = tagged_page();

    let mut first = translator(MemoryStorage::new());
    assert_eq!(first.initialize(&mut loaded).language, "en");

    translator(MemoryStorage::new()).apply_translations(&mut explicit, "en");
    assert_eq!(loaded, explicit);
    assert_eq!(
        first.storage().get_item("preferred_lang").unwrap().as_deref(),
        Some("en")
    );
}

#[test]
fn stored_telugu_is_applied_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = dir.path().join("preferences.toml");

    {
        let mut translator =
            Translator::new(TranslationStore::builtin().unwrap(), FileStorage::new(&prefs));
        translator.apply_translations(&mut tagged_page(), "te");
    }

    let mut reloaded =
        Translator::new(TranslationStore::builtin().unwrap(), FileStorage::new(&prefs));
    let mut doc = tagged_page();
    let summary = reloaded.initialize(&mut doc);

    assert_eq!(summary.language, "te");
    assert_eq!(
        doc.find("data-i18n", "nav_dashboard").unwrap().text(),
        "డ్యాష్‌బోర్డ్"
    );
}

#[test]
fn placeholder_inputs_keep_empty_text() {
    let mut translator = translator(MemoryStorage::new());
    let mut doc = MemoryDocument::new()
        .with(Element::new("input").with_attr("data-i18n", "reg_password").with_attr("type", "password"))
        .with(
            Element::new("textarea")
                .with_attr("data-i18n", "alert_desc")
                .with_attr("placeholder", "Description"),
        );

    translator.apply_translations(&mut doc, "te");

    let input = doc.element(0).unwrap();
    assert_eq!(input.placeholder(), Some("పాస్‌వర్డ్"));
    assert_eq!(input.text(), "");
    let area = doc.element(1).unwrap();
    assert_eq!(area.placeholder(), Some("వివరణ"));
    assert_eq!(area.text(), "");
}

#[test]
fn static_html_page_round_trip_through_languages() {
    let page = r#"<!doctype html>
<html>
<body>
  <nav>
    <a href="/dashboard" data-i18n="nav_dashboard">Dashboard</a>
    <a href="/alerts" data-i18n="nav_alerts">Alerts</a>
  </nav>
  <form>
    <input name="username" data-i18n="reg_username" placeholder="Username">
    <button type="submit" data-i18n="btn_register">Register User</button>
  </form>
</body>
</html>
"#;
    let mut translator = translator(MemoryStorage::new());
    let mut doc = HtmlDocument::new(page);

    let summary = translator.apply_translations(&mut doc, "te");
    assert_eq!(summary.updated, 4);
    assert!(doc.as_str().contains(r#"data-i18n="nav_alerts">అలర్ట్‌లు</a>"#));
    assert!(doc.as_str().contains(r#"placeholder="వినియోగదారు పేరు""#));

    translator.apply_translations(&mut doc, "en");
    assert_eq!(doc.as_str(), page);
}

#[test]
fn page_still_translates_when_storage_cannot_open() {
    let blocked: attendance_i18n::Result<MemoryStorage> =
        Err(AppError::Storage("localStorage disabled".into()));
    let mut translator = Translator::new(TranslationStore::builtin().unwrap(), or_memory(blocked));
    let mut doc = MemoryDocument::new()
        .with(Element::new("span").with_attr("data-i18n", "nav_dashboard").with_text("Dashboard"));

    assert_eq!(translator.initialize(&mut doc).language, "en");
    let summary = translator.apply_translations(&mut doc, "te");
    assert_eq!(summary.updated, 1);
    assert_eq!(doc.element(0).unwrap().text(), "డ్యాష్‌బోర్డ్");
    assert_eq!(translator.preferred_language(), "te");
}
