//! File-backed logging for cidex
//!
//! The TUI owns the terminal, so log output goes to cidex.log next to the
//! executable instead of stdout/stderr. Backs the `log` facade; call `init`
//! once before anything logs.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Metadata, Record};

/// Global logger instance
static LOGGER: OnceLock<CidexLogger> = OnceLock::new();

/// Main logger struct
pub struct CidexLogger {
    file: Mutex<Option<File>>,
}

impl CidexLogger {
    /// Create a new logger writing to the log file, truncated each run
    fn new() -> Self {
        let log_path = log_path();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&log_path)
            .ok();

        Self {
            file: Mutex::new(file),
        }
    }

    fn write_entry(&self, entry: &str) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.write_all(entry.as_bytes());
                let _ = file.flush();
            }
        }
    }
}

impl log::Log for CidexLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = format!(
            "[{}] [{:5}] [{}] {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        self.write_entry(&entry);
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

/// Log file path (same directory as the executable)
fn log_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cidex.log")
}

/// Initialize the global logger
pub fn init(level: LevelFilter) {
    let logger = LOGGER.get_or_init(CidexLogger::new);
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Flush the log file
pub fn flush() {
    use log::Log;
    if let Some(logger) = LOGGER.get() {
        logger.flush();
    }
}

/// Write a separator line for readability
pub fn separator(label: &str) {
    log::info!(target: "---", "========== {} ==========", label);
}
