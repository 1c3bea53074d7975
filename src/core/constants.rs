pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language used when no preference has been stored yet.
pub const DEFAULT_LANGUAGE: &str = "en";
/// Attribute that opts an element into translation.
pub const I18N_ATTRIBUTE: &str = "data-i18n";
/// Storage key holding the last applied language.
pub const PREFERENCE_KEY: &str = "preferred_lang";

pub const CONFIG_DIR: &str = ".i18n";
pub const CONFIG_FILE: &str = "i18n.toml";
pub const PREFERENCE_FILE: &str = "preferences.toml";
