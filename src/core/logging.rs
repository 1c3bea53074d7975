// src/core/logging.rs
use crate::core::error::{AppError, Result};
use log::LevelFilter;

/// Accepts level names as well as the 1-5 shorthand.
pub fn string_to_level_filter(input: &str) -> Result<LevelFilter> {
    match input.trim().to_lowercase().as_str() {
        "0" | "off" => Ok(LevelFilter::Off),
        "1" | "error" => Ok(LevelFilter::Error),
        "2" | "warn" | "warning" => Ok(LevelFilter::Warn),
        "3" | "info" => Ok(LevelFilter::Info),
        "4" | "debug" => Ok(LevelFilter::Debug),
        "5" | "trace" => Ok(LevelFilter::Trace),
        other => Err(AppError::Validation(format!("Unknown log level: {}", other))),
    }
}

/// Installs env_logger. `RUST_LOG` wins over the configured level; an
/// unparsable configured level falls back to `info`.
pub fn init_logger(configured: &str) {
    let level = string_to_level_filter(configured).unwrap_or(LevelFilter::Info);

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp_secs();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
