use std::fmt;
use std::io::{
    self,
    Write,
};
use std::path::Path;

use crossterm::style::Stylize;

use super::LogRecord;
use crate::color::Style;

/// Writes one colorized line per record. Terminal write failures are ignored.
pub struct ConsoleSink {
    target: Box<dyn Write + Send>,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn new(target: impl Write + Send + 'static) -> Self {
        Self {
            target: Box::new(target),
        }
    }

    pub fn render(&mut self, record: &LogRecord<'_>, style: Style) {
        let _ = writeln!(
            self.target,
            "[{}] {} {} -> {}",
            record.timestamp,
            style.paint(record.level()),
            record.message,
            record.location.file()
        );
        let _ = self.target.flush();
    }

    /// `log_file` is `None` when file output is disabled.
    pub fn banner(&mut self, config_name: &str, log_file: Option<&Path>) {
        let log_file = log_file
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "False".to_string());

        let _ = writeln!(
            self.target,
            "[{}]\n{}{}\n{}{}",
            "Logger initialized".yellow(),
            "Configuration: ".dark_blue(),
            config_name.white(),
            "Log file: ".blue(),
            log_file.as_str().white(),
        );
        let _ = self.target.flush();
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}
