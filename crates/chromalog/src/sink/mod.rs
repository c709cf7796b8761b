mod console;
mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

use chrono::{
    Local,
    SecondsFormat,
};

use crate::location::SourceLocation;
use crate::severity::Severity;

/// One accepted log call, built fresh and handed to every sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub timestamp: String,
    pub severity: Severity,
    pub message: &'a str,
    pub location: &'a SourceLocation,
}

impl<'a> LogRecord<'a> {
    pub fn now(severity: Severity, message: &'a str, location: &'a SourceLocation) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            severity,
            message,
            location,
        }
    }

    pub fn level(&self) -> &'static str {
        self.severity.name()
    }

    /// `timestamp,level,message,sourceFile,line`
    pub fn fields(&self) -> [String; 5] {
        [
            self.timestamp.clone(),
            self.level().to_string(),
            self.message.to_string(),
            self.location.file().to_string(),
            self.location.line().to_string(),
        ]
    }
}
