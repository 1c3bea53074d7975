// src/web.rs
//! Browser entry points. The host page loads the module; `start` runs the
//! page-load hook and `applyTranslations` is exposed for language switchers.

use crate::dom::WebDocument;
use crate::i18n::TranslationStore;
use crate::lang::Translator;
use crate::storage::{or_memory, LocalStorage, PreferenceStorage};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static PAGE: RefCell<Option<Translator<Box<dyn PreferenceStorage>>>> =
        const { RefCell::new(None) };
}

/// Routes `log` records to the browser console.
struct ConsoleLogger;

static CONSOLE: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

fn install_console_logger() {
    if log::set_logger(&CONSOLE).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

fn with_translator<R>(f: impl FnOnce(&mut Translator<Box<dyn PreferenceStorage>>) -> R) -> Option<R> {
    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        if page.is_none() {
            let store = match TranslationStore::builtin() {
                Ok(store) => store,
                Err(e) => {
                    log::error!("Language packs failed to load: {}", e);
                    return None;
                }
            };
            *page = Some(Translator::new(store, or_memory(LocalStorage::from_window())));
        }
        page.as_mut().map(f)
    })
}

/// Translate the page into `lang` and remember it.
#[wasm_bindgen(js_name = applyTranslations)]
pub fn apply_translations(lang: &str) {
    let Ok(mut doc) = WebDocument::from_window() else {
        return;
    };
    with_translator(|translator| translator.apply_translations(&mut doc, lang));
}

fn initialize_page() {
    let Ok(mut doc) = WebDocument::from_window() else {
        return;
    };
    with_translator(|translator| translator.initialize(&mut doc));
}

#[wasm_bindgen(start)]
pub fn start() {
    install_console_logger();

    let Ok(doc) = WebDocument::from_window() else {
        log::error!("No document; translations not applied");
        return;
    };
    if doc.inner().ready_state() != "loading" {
        initialize_page();
        return;
    }

    let on_ready = Closure::once_into_js(initialize_page);
    if let Err(e) = doc
        .inner()
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
    {
        log::warn!("DOMContentLoaded hook failed: {:?}", e);
    }
}
