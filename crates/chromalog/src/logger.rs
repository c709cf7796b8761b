use std::fmt;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::atomic::{
    AtomicBool,
    Ordering,
};
use std::sync::{
    Mutex,
    MutexGuard,
    PoisonError,
};

use tracing::{
    debug,
    error,
    warn,
};

use crate::color::{
    Palette,
    Style,
};
use crate::config::{
    effective_file_name,
    ConfigLoader,
    LogConfig,
};
use crate::error::{
    LoggerError,
    Result,
};
use crate::location::SourceLocation;
use crate::severity::Severity;
use crate::sink::{
    ConsoleSink,
    FileSink,
    LogRecord,
};

/// Receives file-sink failures that `Logger::log` otherwise swallows.
pub type WriteErrorObserver = Box<dyn Fn(&LoggerError) + Send + Sync>;

/// Leveled logger. Owned by the caller and passed explicitly to call sites;
/// share it with `Arc` across threads.
pub struct Logger {
    threshold: Severity,
    palette: Palette,
    log_file_path: Option<PathBuf>,
    file: Mutex<Option<FileSink>>,
    console: Mutex<ConsoleSink>,
    on_write_error: Option<WriteErrorObserver>,
    closed: AtomicBool,
}

impl Logger {
    /// Loads `config_file` from the configuration directory (empty means
    /// `config.yaml`), opens the log file if enabled and prints the banner.
    pub fn initialize(config_file: &str) -> Result<Self> {
        Self::initialize_with(&ConfigLoader::default(), config_file)
    }

    pub fn initialize_with(loader: &ConfigLoader, config_file: &str) -> Result<Self> {
        let config = loader.load(config_file)?;
        Self::builder(config)
            .config_name(effective_file_name(config_file))
            .build()
    }

    pub fn builder(config: LogConfig) -> LoggerBuilder {
        LoggerBuilder::new(config)
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity.passes(self.threshold)
    }

    pub fn style(&self, severity: Severity) -> Style {
        self.palette.style(severity)
    }

    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file_path.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Never fails. Records below the threshold are dropped silently.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl AsRef<str>) {
        self.log_at(severity, message.as_ref(), SourceLocation::caller());
    }

    #[track_caller]
    pub fn default(&self, message: impl AsRef<str>) {
        self.log_at(Severity::Default, message.as_ref(), SourceLocation::caller());
    }

    #[track_caller]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log_at(Severity::Info, message.as_ref(), SourceLocation::caller());
    }

    #[track_caller]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log_at(Severity::Warning, message.as_ref(), SourceLocation::caller());
    }

    #[track_caller]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log_at(Severity::Error, message.as_ref(), SourceLocation::caller());
    }

    #[track_caller]
    pub fn danger(&self, message: impl AsRef<str>) {
        self.log_at(Severity::Danger, message.as_ref(), SourceLocation::caller());
    }

    pub fn log_at(&self, severity: Severity, message: &str, location: SourceLocation) {
        if !self.enabled(severity) {
            return;
        }

        let record = LogRecord::now(severity, message, &location);

        self.write_to_file(&record);
        lock(&self.console).render(&record, self.palette.style(severity));
    }

    /// Releases the log file. Safe to call more than once.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        if let Some(sink) = lock(&self.file).take() {
            debug!("Closing log file {}", sink.path().display());
        }
    }

    pub(crate) fn flush(&self) {
        if let Some(sink) = lock(&self.file).as_mut() {
            if let Err(e) = sink.flush() {
                debug!("Failed to flush log file: {:?}", e);
            }
        }
    }

    fn write_to_file(&self, record: &LogRecord<'_>) {
        let mut guard = lock(&self.file);
        let Some(sink) = guard.as_mut() else {
            return;
        };

        if let Err(source) = sink.append(record) {
            let err = LoggerError::LogFileWrite {
                path: sink.path().to_path_buf(),
                source,
            };
            drop(guard);
            self.report_write_error(&err);
        }
    }

    fn report_write_error(&self, err: &LoggerError) {
        match &self.on_write_error {
            Some(observer) => observer(err),
            None => error!("{}", err),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("palette", &self.palette)
            .field("log_file_path", &self.log_file_path)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

pub struct LoggerBuilder {
    config: LogConfig,
    config_name: Option<String>,
    console: Option<ConsoleSink>,
    on_write_error: Option<WriteErrorObserver>,
}

impl LoggerBuilder {
    pub fn new(config: LogConfig) -> Self {
        Self {
            config,
            config_name: None,
            console: None,
            on_write_error: None,
        }
    }

    /// Label shown in the startup banner.
    pub fn config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = Some(name.into());
        self
    }

    /// Replaces standard output for the banner and rendered lines.
    pub fn console(mut self, target: impl Write + Send + 'static) -> Self {
        self.console = Some(ConsoleSink::new(target));
        self
    }

    pub fn on_write_error(
        mut self, observer: impl Fn(&LoggerError) + Send + Sync + 'static,
    ) -> Self {
        self.on_write_error = Some(Box::new(observer));
        self
    }

    pub fn build(self) -> Result<Logger> {
        let settings = &self.config.log_settings;
        let threshold = settings.threshold();
        let palette = Palette::from_config(&self.config.log_colors);

        let inert = settings.inert_fields();
        if !inert.is_empty() {
            warn!("Logger config fields have no effect: {}", inert.join(", "));
        }

        let file = if settings.log_file_bool {
            Some(FileSink::open(settings.log_file_path())?)
        } else {
            None
        };
        let log_file_path = file.as_ref().map(|sink| sink.path().to_path_buf());

        let mut console = self.console.unwrap_or_default();
        let config_name = self
            .config_name
            .unwrap_or_else(|| effective_file_name("").to_string());
        console.banner(&config_name, log_file_path.as_deref());

        debug!(
            "Logger initialized with threshold {} (file output: {})",
            threshold,
            log_file_path.is_some()
        );

        Ok(Logger {
            threshold,
            palette,
            log_file_path,
            file: Mutex::new(file),
            console: Mutex::new(console),
            on_write_error: self.on_write_error,
            closed: AtomicBool::new(false),
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
