// src/main.rs
use attendance_i18n::cli::{self, Cli};
use attendance_i18n::core::{constants::VERSION, logging};
use attendance_i18n::{Config, Result, TranslationStore};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::load().await?,
    };
    logging::init_logger(&config.log_level);
    log::debug!("attendance-i18n v{}", VERSION);
    if let Some(path) = config.config_path() {
        log::debug!("Config loaded from {}", path.display());
    }

    let store = TranslationStore::builtin()?;
    let result = cli::execute(&args.command, store, &config).await?;

    if result.success {
        println!("{}", result.message);
        Ok(())
    } else {
        eprintln!("{}", result.message);
        std::process::exit(1);
    }
}
