// src/setup/setup_toml.rs
use crate::core::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::core::prelude::*;
use tokio::fs;

const DEFAULT_CONFIG: &str = r#"[general]
# error | warn | info | debug | trace (RUST_LOG overrides this)
log_level = "info"

[language]
# Applied on first load, before any preference has been stored
default = "en"
# Elements opt in with <span data-i18n="nav_dashboard">
attribute = "data-i18n"
storage_key = "preferred_lang"

[storage]
# Relative to this file
path = "preferences.toml"
"#;

/// Writes the default config to the first candidate path unless one of the
/// candidates already exists.
pub async fn ensure_config_exists(paths: &[PathBuf]) -> Result<PathBuf> {
    if let Some(existing) = paths.iter().find(|p| p.exists()) {
        return Ok(existing.clone());
    }

    let config_path = paths
        .first()
        .cloned()
        .ok_or_else(|| AppError::Validation("No config location available".into()))?;

    if let Some(config_dir) = config_path.parent() {
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)
                .await
                .map_err(AppError::Io)?;
            log::debug!("Config directory created: {}", config_dir.display());
        }
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .await
        .map_err(AppError::Io)?;
    log::info!("Config file created: {}", config_path.display());

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
        }
    }
    paths.push(PathBuf::from(CONFIG_FILE));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_default_config_in_first_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join(".i18n").join("i18n.toml");
        let second = dir.path().join("i18n.toml");

        let created = ensure_config_exists(&[first.clone(), second.clone()])
            .await
            .unwrap();
        assert_eq!(created, first);
        assert!(!second.exists());

        let config = Config::from_file(&created).await.unwrap();
        assert_eq!(config.default_language, "en");
    }

    #[tokio::test]
    async fn existing_candidate_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.toml");
        let second = dir.path().join("b.toml");
        tokio::fs::write(&second, "[language]\ndefault = \"te\"\n")
            .await
            .unwrap();

        let found = ensure_config_exists(&[first.clone(), second.clone()])
            .await
            .unwrap();
        assert_eq!(found, second);
        assert!(!first.exists());
    }

    #[test]
    fn working_directory_is_always_a_candidate() {
        assert!(get_config_paths().contains(&PathBuf::from("i18n.toml")));
    }
}
