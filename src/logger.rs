//! Application logging.
//!
//! All code logs through the `log` macros. [`Logger::init`] installs a `fern`
//! dispatch that keeps an in-memory copy of every line for the log viewer and,
//! when logging is enabled in the config, also appends to a log file.

use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Lines kept in memory for the log viewer
const MAX_MEMORY_LINES: usize = 1000;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// In-memory only logger
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            log_file: None,
        }
    }

    /// Logger honoring `[logging] enabled`; file output goes to [`Logger::get_log_file_path`]
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        if enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            logger.log_file = Some(path);
        }
        Ok(logger)
    }

    /// Logger appending to `path`. Unlike [`Logger::from_config`] the parent
    /// directory must already exist.
    pub fn with_file<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            log_file: Some(path.into()),
        }
    }

    /// Default log file location: `<data_dir>/taskboard/taskboard.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("taskboard").join("taskboard.log"))
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Build the fern dispatch feeding the memory buffer and the optional file
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let level = if self.is_enabled() {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };

        let memory = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .level(log::LevelFilter::Warn)
            .level_for("taskboard", level)
            .chain(fern::Output::call(move |record| {
                memory.push(format!("[{}] {}", record.level(), record.args()));
            }));

        if let Some(path) = &self.log_file {
            let file = fern::log_file(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(
                fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "{} {:<5} {}: {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file),
            );
        }

        Ok(dispatch)
    }

    /// Install as the global `log` backend
    pub fn init(&self) -> Result<()> {
        self.dispatch()?
            .apply()
            .context("Failed to install global logger")
    }

    /// Add a log entry directly to the in-memory buffer
    pub fn log(&self, message: String) {
        self.push(message);
    }

    fn push(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_MEMORY_LINES {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
