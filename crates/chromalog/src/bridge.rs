use std::sync::Arc;

use log::{
    Metadata,
    Record,
    SetLoggerError,
};

use crate::location::SourceLocation;
use crate::logger::Logger;
use crate::severity::Severity;

/// Routes `log` facade macros through a `Logger`.
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Registers the bridge as the process-wide `log` logger. Keep a clone of
    /// `logger` to call `close` before exit.
    pub fn install(logger: Arc<Logger>) -> Result<(), SetLoggerError> {
        let max_level = logger.threshold().to_level_filter();
        log::set_boxed_logger(Box::new(Self::new(logger)))?;
        log::set_max_level(max_level);
        Ok(())
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger
            .enabled(Severity::from_log_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let location = match (record.file_static(), record.file(), record.line()) {
            (Some(file), _, Some(line)) => SourceLocation::new(file, line),
            (None, Some(file), Some(line)) => SourceLocation::new(file.to_string(), line),
            _ => SourceLocation::unknown(),
        };

        self.logger.log_at(
            Severity::from_log_level(record.level()),
            &record.args().to_string(),
            location,
        );
    }

    fn flush(&self) {
        self.logger.flush();
    }
}
