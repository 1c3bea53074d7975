// src/lang/mod.rs
pub mod persistence;
pub mod translator;

pub use persistence::LanguagePersistence;
pub use translator::{ApplySummary, Translator};
