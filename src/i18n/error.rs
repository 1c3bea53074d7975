// src/i18n/error.rs

#[derive(Debug)]
pub enum TranslationError {
    /// A language pack could not be read or parsed.
    LoadError(String),
    /// No embedded pack exists for the requested language.
    UnknownPack(String),
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadError(msg) => write!(f, "Load error: {}", msg),
            Self::UnknownPack(lang) => write!(f, "No language pack for '{}'", lang),
        }
    }
}

impl std::error::Error for TranslationError {}
