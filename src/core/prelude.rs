// src/core/prelude.rs

// Core essentials
pub use crate::core::config::Config;
pub use crate::core::constants::{DEFAULT_LANGUAGE, I18N_ATTRIBUTE, PREFERENCE_KEY};
pub use crate::core::error::{AppError, Result};

// i18n essentials
pub use crate::i18n::{TranslationError, TranslationStore, TranslationTable};

// Standard library essentials
pub use std::path::{Path, PathBuf};
