// src/storage/file.rs
use super::PreferenceStorage;
use crate::core::error::{AppError, Result};
use std::path::{Path, PathBuf};
use toml_edit::{value, Document, Item, Table};

const SECTION: &str = "preferences";

/// Preferences kept in a `[preferences]` table of a TOML file. The file is
/// edited in place, so other tables and comments survive a write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Option<Document>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(AppError::Io)?;
        content
            .parse::<Document>()
            .map(Some)
            .map_err(|e| AppError::Storage(format!("{}: {}", self.path.display(), e)))
    }
}

impl PreferenceStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let Some(doc) = self.read_document()? else {
            return Ok(None);
        };
        Ok(doc
            .get(SECTION)
            .and_then(|section| section.get(key))
            .and_then(Item::as_str)
            .map(str::to_string))
    }

    fn set_item(&mut self, key: &str, val: &str) -> Result<()> {
        let mut doc = self.read_document()?.unwrap_or_default();

        if !doc.get(SECTION).is_some_and(Item::is_table) {
            doc.insert(SECTION, Item::Table(Table::new()));
        }
        doc[SECTION][key] = value(val);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(AppError::Io)?;
            }
        }
        std::fs::write(&self.path, doc.to_string()).map_err(AppError::Io)?;

        log::debug!("Preference '{}' = '{}' saved to {}", key, val, self.path.display());
        Ok(())
    }
}
