//! Logging for ticklist.
//!
//! All code logs through the `log` facade. [`init`] installs a `fern`
//! dispatcher once per process with two sinks:
//!
//! * an in-memory [`Logger`] that backs the logs dialog (`G`)
//! * a log file under the platform data directory, only when enabled in config

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::OnceCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Entries kept in memory before the oldest are dropped
pub const MAX_LOG_ENTRIES: usize = 500;

static LOGGING_INIT: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == MAX_LOG_ENTRIES {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.logs.lock().map(|logs| logs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Path of the log file written when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Install the global logger. Only the first call has an effect; later calls
/// return the outcome of the first one.
///
/// Returns the log file path when file logging is active.
pub fn init(config: &LoggingConfig, memory: Logger) -> Result<Option<PathBuf>> {
    LOGGING_INIT
        .get_or_try_init(|| install(config, memory))
        .cloned()
}

fn install(config: &LoggingConfig, memory: Logger) -> Result<Option<PathBuf>> {
    let level = config.level_filter()?;

    let memory_sink = fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
        .chain(fern::Output::call(move |record| memory.log(record.args().to_string())));

    let mut dispatch = fern::Dispatch::new().level(level).chain(memory_sink);

    let log_path = if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let file_sink = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {:<5} {}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .chain(file);
        dispatch = dispatch.chain(file_sink);
        Some(path)
    } else {
        None
    };

    dispatch.apply().context("Failed to install logger")?;

    log::info!(
        "Logging initialized (level={}, file={})",
        level,
        log_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "disabled".to_string())
    );
    Ok(log_path)
}
