//! File logging backed by `fern`.
//!
//! The crate logs through the `log` facade. When logging is enabled in the
//! configuration, [`init`] routes records to a file in the user data
//! directory; otherwise no logger is installed and records are dropped.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};

/// Location of the log file.
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(data_dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatch for the given settings without installing it.
///
/// Returns `None` when logging is disabled.
pub fn dispatch(config: &LoggingConfig) -> Result<Option<fern::Dispatch>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = config.level_filter()?;
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file);

    Ok(Some(dispatch))
}

/// Install the global logger. Returns `true` if a logger was installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    match dispatch(config)? {
        Some(dispatch) => {
            dispatch.apply().context("Logger already initialized")?;
            Ok(true)
        }
        None => Ok(false),
    }
}
