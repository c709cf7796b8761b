use std::fmt;

/// Ordered log severity. `Default` is the lowest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Default,
    Info,
    Warning,
    Error,
    Danger,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Default,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Danger,
    ];

    /// Case-insensitive; anything unrecognized, including the empty string,
    /// maps to `Default`.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            "danger" => Severity::Danger,
            _ => Severity::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Danger => "DANGER",
            Severity::Default => "LOG",
        }
    }

    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn passes(self, threshold: Severity) -> bool {
        self >= threshold
    }

    pub fn from_log_level(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            log::Level::Debug | log::Level::Trace => Severity::Default,
        }
    }

    /// Most verbose `log` facade level that still reaches this threshold.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Severity::Default => log::LevelFilter::Trace,
            Severity::Info => log::LevelFilter::Info,
            Severity::Warning => log::LevelFilter::Warn,
            Severity::Error | Severity::Danger => log::LevelFilter::Error,
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::parse(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
