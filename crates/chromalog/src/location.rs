use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

pub const UNKNOWN_FILE: &str = "unknown";

/// Source file and line of a log call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    file: Cow<'static, str>,
    line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Location of whoever called the `#[track_caller]` chain ending here.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FILE, 0)
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
