pub mod test_initialize;
pub mod test_scenarios;

use std::fs;
use std::io::{
    self,
    Write,
};
use std::path::Path;
use std::sync::{
    Arc,
    Mutex,
};

use csv::ReaderBuilder;

use crate::config::LogConfig;

/// In-memory console target shared between a logger and the test.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn config_with(level: &str, log_file: Option<&Path>) -> LogConfig {
    let mut config = LogConfig::default();
    config.log_settings.log_level = level.to_string();
    if let Some(path) = log_file {
        config.log_settings.log_file_bool = true;
        config.log_settings.log_file_name = path.to_string_lossy().into_owned();
    }
    config
}

pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    if fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true) {
        return Vec::new();
    }
    ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap()
        .records()
        .map(|row| row.unwrap().iter().map(str::to_string).collect())
        .collect()
}
