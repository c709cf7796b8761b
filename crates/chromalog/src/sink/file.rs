use std::fs::{
    self,
    File,
    OpenOptions,
};
use std::io;
use std::path::{
    Path,
    PathBuf,
};

use csv::{
    Writer,
    WriterBuilder,
};
use tracing::debug;

use super::LogRecord;
use crate::error::{
    LoggerError,
    Result,
};

/// Append-only CSV sink. Every row is flushed before `append` returns.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: Writer<File>,
}

impl FileSink {
    /// Opens `path` for appending, creating the file and any missing parent
    /// directories. A name like `logs/app.csv` therefore succeeds even when
    /// `logs` does not exist yet; a parent that cannot be created is reported
    /// as `LogFileOpen`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let file = open_append(&path).map_err(|source| LoggerError::LogFileOpen {
            path: path.clone(),
            source,
        })?;
        debug!("Opened log file {}", path.display());

        let writer = WriterBuilder::new().has_headers(false).from_writer(file);

        Ok(Self { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, record: &LogRecord<'_>) -> std::result::Result<(), csv::Error> {
        self.writer.write_record(record.fields())?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}
