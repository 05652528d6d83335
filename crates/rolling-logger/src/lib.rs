//! Rolling Logger
//!
//! `log` facade backend that keeps the most recent entries in a bounded
//! circular buffer. Every entry is also forwarded to the browser console
//! on wasm, or to stderr natively.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggerError {
    #[error("Logger already initialized")]
    AlreadyInitialized,
    #[error("Logger not initialized")]
    NotInitialized,
}

/// One buffered log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format_line(&self) -> String {
        format!(
            "{} {:<5} {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Fixed-capacity FIFO; the oldest entry goes first
#[derive(Debug)]
struct RingBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl RingBuffer {
    fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn push(&mut self, entry: LogEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

struct RollingLogger {
    app_name: String,
    buffer: Mutex<RingBuffer>,
}

impl RollingLogger {
    fn new(app_name: &str, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&self.app_name, &entry);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(entry);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(app_name: &str, entry: &LogEntry) {
    use web_sys::console;

    let line = format!("[{}] {}", app_name, entry.format_line());
    let line = line.as_str();
    match entry.level {
        Level::Error => console::error_1(&line.into()),
        Level::Warn => console::warn_1(&line.into()),
        Level::Info => console::info_1(&line.into()),
        Level::Debug | Level::Trace => console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(app_name: &str, entry: &LogEntry) {
    eprintln!("[{}] {}", app_name, entry.format_line());
}

/// Install the logger as the global `log` backend
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), LoggerError> {
    let mut created = false;
    let logger = LOGGER.get_or_init(|| {
        created = true;
        RollingLogger::new(app_name, capacity)
    });
    if !created {
        return Err(LoggerError::AlreadyInitialized);
    }
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    let logger = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::info!(target: logger.app_name.as_str(), "{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    let logger = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::error!(target: logger.app_name.as_str(), "{}", message);
    Ok(())
}

/// Buffered entries, oldest first; empty before initialization
pub fn recent_entries() -> Vec<LogEntry> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.snapshot()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(entry(&format!("m{}", i)));
        }
        let messages: Vec<_> = buffer.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = RingBuffer::new(0);
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        assert_eq!(buffer.snapshot().len(), 1);
    }

    #[test]
    fn test_format_line() {
        let line = entry("hello").format_line();
        assert!(line.contains("INFO"));
        assert!(line.ends_with("test: hello"));
    }

    // The global logger can be installed once per process, so the whole
    // lifecycle lives in one test.
    #[test]
    fn test_global_logger_lifecycle() {
        init_logger("test-app", 10).unwrap();
        assert_eq!(init_logger("test-app", 10), Err(LoggerError::AlreadyInitialized));

        info("first").unwrap();
        error("second").unwrap();
        let entries = recent_entries();
        let ours: Vec<_> = entries.iter().filter(|e| e.target == "test-app").collect();
        assert_eq!(ours.len(), 2);
        assert_eq!(ours[0].message, "first");
        assert_eq!(ours[1].level, Level::Error);
    }
}
