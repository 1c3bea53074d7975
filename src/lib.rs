// Module definitions
pub mod core;
pub mod dom;
pub mod i18n;
pub mod lang;
pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod setup;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

// Essential re-exports
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use dom::{Document, Element, HtmlDocument, MemoryDocument, TargetKind, TextTarget};
pub use i18n::{TranslationStore, TranslationTable};
pub use lang::{ApplySummary, Translator};
pub use storage::{or_memory, FileStorage, MemoryStorage, PreferenceStorage};

/// Translator over the embedded language packs, configured by `config`.
pub fn create_translator<S: PreferenceStorage>(storage: S, config: &Config) -> Result<Translator<S>> {
    let store = TranslationStore::builtin()?;
    Ok(Translator::from_config(store, storage, config))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_config() -> Result<Config> {
    Config::load().await
}
