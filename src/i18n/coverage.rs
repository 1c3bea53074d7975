// src/i18n/coverage.rs
use crate::i18n::types::TranslationTable;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Which keys each language lacks relative to the union of all tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCoverage {
    pub language: String,
    pub present: usize,
    pub missing: Vec<String>,
}

impl CoverageReport {
    pub(crate) fn from_tables(tables: &BTreeMap<String, TranslationTable>) -> Self {
        let all_keys: BTreeSet<&str> = tables.values().flat_map(|t| t.keys()).collect();

        let languages = tables
            .iter()
            .map(|(lang, table)| LanguageCoverage {
                language: lang.clone(),
                present: table.len(),
                missing: all_keys
                    .iter()
                    .filter(|key| !table.contains_key(key))
                    .map(|key| key.to_string())
                    .collect(),
            })
            .collect();

        Self {
            total_keys: all_keys.len(),
            languages,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.languages.iter().all(|l| l.missing.is_empty())
    }
}

impl LanguageCoverage {
    pub fn percent(&self, total_keys: usize) -> f64 {
        if total_keys == 0 {
            100.0
        } else {
            self.present as f64 * 100.0 / total_keys as f64
        }
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} keys across {} languages", self.total_keys, self.languages.len())?;
        for lang in &self.languages {
            writeln!(
                f,
                "  {}: {}/{} ({:.1}%)",
                lang.language,
                lang.present,
                self.total_keys,
                lang.percent(self.total_keys)
            )?;
            for key in &lang.missing {
                writeln!(f, "    missing: {}", key)?;
            }
        }
        Ok(())
    }
}
