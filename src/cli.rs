// src/cli.rs
use crate::core::prelude::*;
use crate::dom::HtmlDocument;
use crate::lang::{LanguagePersistence, Translator};
use crate::storage::FileStorage;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "attendance-i18n")]
#[command(version)]
#[command(about = "Translate data-i18n tagged pages and manage the preferred language")]
pub struct Cli {
    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a static HTML page (stored preference unless --lang is given)
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Language to apply; stored as the new preference
        #[arg(short, long)]
        lang: Option<String>,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Store the preferred language without rendering anything
    Set {
        #[arg(value_name = "LANG")]
        lang: String,
    },

    /// Print a single translation
    Lookup {
        #[arg(value_name = "LANG")]
        lang: String,
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// List the available languages
    Languages,

    /// Report keys missing from any language
    Coverage,
}

#[derive(Debug)]
pub struct CommandResult {
    pub message: String,
    pub success: bool,
}

impl CommandResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

pub async fn execute(
    command: &Commands,
    store: TranslationStore,
    config: &Config,
) -> Result<CommandResult> {
    let storage = FileStorage::new(&config.preference_file);

    match command {
        Commands::Render { file, lang, output } => {
            let html = tokio::fs::read_to_string(file)
                .await
                .map_err(AppError::Io)?;
            let mut doc = HtmlDocument::new(html);
            let mut translator = Translator::from_config(store, storage, config);

            let summary = match lang {
                Some(lang) => translator.apply_translations(&mut doc, lang),
                None => translator.initialize(&mut doc),
            };
            log::info!(
                "Rendered {} in '{}': {} updated, {} untouched",
                file.display(),
                summary.language,
                summary.updated,
                summary.untouched
            );

            match output {
                Some(path) => {
                    tokio::fs::write(path, doc.as_str())
                        .await
                        .map_err(AppError::Io)?;
                    Ok(CommandResult::ok(format!(
                        "{} -> {} [{}]",
                        file.display(),
                        path.display(),
                        summary.language
                    )))
                }
                None => Ok(CommandResult::ok(doc.into_string())),
            }
        }

        Commands::Set { lang } => {
            if !store.has_language(lang) {
                log::warn!("No language pack for '{}', storing it anyway", lang);
            }
            let mut persistence = LanguagePersistence::with_key(storage, config.storage_key.clone());
            if persistence.save(lang) {
                Ok(CommandResult::ok(format!("Preferred language: {}", lang)))
            } else {
                Ok(CommandResult::failed(format!(
                    "Could not store preference in {}",
                    config.preference_file.display()
                )))
            }
        }

        Commands::Lookup { lang, key } => match store.get(lang, key) {
            Some(text) => Ok(CommandResult::ok(text)),
            None => Ok(CommandResult::failed(format!("Missing: {}/{}", lang, key))),
        },

        Commands::Languages => {
            let current = LanguagePersistence::with_key(storage, config.storage_key.clone())
                .load()
                .unwrap_or_else(|| config.default_language.clone());
            let lines: Vec<String> = store
                .languages()
                .map(|lang| {
                    let marker = if lang == current { "*" } else { " " };
                    let keys = store.table(lang).map_or(0, TranslationTable::len);
                    format!("{} {} ({} keys)", marker, lang, keys)
                })
                .collect();
            Ok(CommandResult::ok(lines.join("\n")))
        }

        Commands::Coverage => {
            let report = store.coverage_report();
            let complete = report.is_complete();
            let text = report.to_string().trim_end().to_string();
            Ok(if complete {
                CommandResult::ok(text)
            } else {
                CommandResult::failed(text)
            })
        }
    }
}
