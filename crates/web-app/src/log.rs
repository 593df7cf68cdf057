//! Persistent log buffer.
//!
//! Log records are mirrored into a capped browser-storage buffer so that
//! problem reports from a device without a connected debugger still contain
//! the recent history.

use std::{
    collections::VecDeque,
    ops::DerefMut,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

static LOG: Mutex<Option<Arc<Mutex<dyn Repository>>>> = Mutex::new(None);

/// Upper bound on retained entries, enforced by repository implementations.
pub const MAX_ENTRIES: usize = 100;

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if a logger has already been initialized.
pub fn init(repository: Arc<Mutex<dyn Repository>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(log) = LOG.lock() {
                if let Some(ref repository) = *log {
                    let message = record.args().to_string();
                    print(record.level(), &message);
                    let _ = repository.lock().map(|mut repository| {
                        repository.deref_mut().write_entry(Entry {
                            time: Utc::now().format("%b %d %H:%M:%S").to_string(),
                            level: record.level(),
                            message,
                        })
                    });
                }
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn print(level: Level, message: &str) {
    let message = message.to_string();
    match level {
        Level::Error => gloo_console::error!(message),
        Level::Warn => gloo_console::warn!(message),
        Level::Info => gloo_console::info!(message),
        Level::Debug | Level::Trace => gloo_console::debug!(message),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn print(level: Level, message: &str) {
    eprintln!("{level:<5} {message}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_entry_serde() {
        let entry = Entry {
            time: String::from("Dec 12 13:43:23"),
            level: Level::Warn,
            message: String::from("failed to write user data"),
        };
        let serialized = serde_json::to_value(&entry).unwrap();
        let deserialized: Entry = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, entry);
    }
}
