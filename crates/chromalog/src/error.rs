use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Config file not found: {}", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to open log file {}: {source}", .path.display())]
    LogFileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Only ever handed to a write-error observer; `Logger::log` never returns it.
    #[error("Failed to write log record to {}: {source}", .path.display())]
    LogFileWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoggerError>;
