// src/core/config.rs
use crate::core::constants::{DEFAULT_LANGUAGE, I18N_ATTRIBUTE, PREFERENCE_FILE, PREFERENCE_KEY};
use crate::core::error::{AppError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralConfig,
    #[serde(default)]
    language: LanguageConfig,
    #[serde(default)]
    storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct LanguageConfig {
    #[serde(default = "default_language")]
    default: String,
    #[serde(default = "default_attribute")]
    attribute: String,
    #[serde(default = "default_storage_key")]
    storage_key: String,
}

#[derive(Debug, Deserialize)]
struct StorageConfig {
    #[serde(default = "default_preference_file")]
    path: String,
}

// Default Functions
fn default_log_level() -> String {
    "info".into()
}
fn default_language() -> String {
    DEFAULT_LANGUAGE.into()
}
fn default_attribute() -> String {
    I18N_ATTRIBUTE.into()
}
fn default_storage_key() -> String {
    PREFERENCE_KEY.into()
}
fn default_preference_file() -> String {
    PREFERENCE_FILE.into()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: default_language(),
            attribute: default_attribute(),
            storage_key: default_storage_key(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_preference_file(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<PathBuf>,
    pub log_level: String,
    /// Language applied when the storage holds no preference.
    pub default_language: String,
    /// Attribute that carries the translation key.
    pub attribute: String,
    /// Key the preferred language is stored under.
    pub storage_key: String,
    /// Preference file for the native build. Relative paths resolve
    /// against the directory of the config file.
    pub preference_file: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl Config {
    pub async fn load() -> Result<Self> {
        Self::load_from(&crate::setup::setup_toml::get_config_paths()).await
    }

    /// First readable candidate wins; if none exists, the default config is
    /// written to the first candidate.
    pub async fn load_from(paths: &[PathBuf]) -> Result<Self> {
        for path in paths {
            if path.exists() {
                match Self::from_file(path).await {
                    Ok(config) => return Ok(config),
                    Err(e) => log::warn!("Skipping config {}: {}", path.display(), e),
                }
            }
        }

        let path = crate::setup::setup_toml::ensure_config_exists(paths).await?;
        let config = Self::from_file(&path).await?;
        log::debug!("New config: {}", path.display());
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(AppError::Io)?;
        let mut config = Self::from_toml_str(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        if config.preference_file.is_relative() {
            config.preference_file = base.join(&config.preference_file);
        }
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let config = Self {
            config_path: None,
            log_level: file.general.log_level,
            default_language: file.language.default.trim().to_string(),
            attribute: file.language.attribute.trim().to_string(),
            storage_key: file.language.storage_key.trim().to_string(),
            preference_file: PathBuf::from(file.storage.path),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn validate(&self) -> Result<()> {
        if self.default_language.is_empty() {
            return Err(AppError::Validation("language.default is empty".into()));
        }
        if self.attribute.is_empty() || self.attribute.contains(char::is_whitespace) {
            return Err(AppError::Validation(format!(
                "language.attribute is not a valid attribute name: '{}'",
                self.attribute
            )));
        }
        if self.storage_key.is_empty() {
            return Err(AppError::Validation("language.storage_key is empty".into()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            log_level: default_log_level(),
            default_language: default_language(),
            attribute: default_attribute(),
            storage_key: default_storage_key(),
            preference_file: PathBuf::from(PREFERENCE_FILE),
        }
    }
}
