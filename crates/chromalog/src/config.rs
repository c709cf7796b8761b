use std::env;
use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::debug;

use crate::error::{
    LoggerError,
    Result,
};
use crate::severity::Severity;

pub const CONFIG_DIR_ENV: &str = "CHROMALOG_CONFIG_DIR";

pub const DEFAULT_CONFIG_DIR: &str = "config";

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub log_level: String,
    pub log_file_bool: bool,
    pub log_file_name: String,
    pub log_file_extension: String,
    /// Not enforced; no rotation happens. Negative values are accepted.
    pub log_file_max_bytes: i64,
    /// Not used for rendering.
    pub log_format: String,
    /// Not used for rendering.
    pub log_date_format: String,
}

impl LogSettings {
    pub fn threshold(&self) -> Severity {
        Severity::parse(&self.log_level)
    }

    pub fn log_file_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}", self.log_file_name, self.log_file_extension))
    }

    /// Names of fields that were set but have no effect.
    pub fn inert_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.log_file_max_bytes != 0 {
            fields.push("log_file_max_bytes");
        }
        if !self.log_format.is_empty() {
            fields.push("log_format");
        }
        if !self.log_date_format.is_empty() {
            fields.push("log_date_format");
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogColorConfig {
    pub info_color: String,
    pub warning_color: String,
    pub error_color: String,
    pub danger_color: String,
    pub default_color: String,
}

impl LogColorConfig {
    pub fn color_for(&self, severity: Severity) -> &str {
        match severity {
            Severity::Info => &self.info_color,
            Severity::Warning => &self.warning_color,
            Severity::Error => &self.error_color,
            Severity::Danger => &self.danger_color,
            Severity::Default => &self.default_color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub log_settings: LogSettings,
    pub log_colors: LogColorConfig,
}

impl LogConfig {
    /// Blank and comment-only documents both yield the all-default config;
    /// the first is short-circuited, the second comes back empty from serde_yaml.
    pub fn from_yaml(content: &[u8], origin: &Path) -> Result<Self> {
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_yaml::from_slice(content).map_err(|source| LoggerError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }
}

/// Resolves config file names against a configuration directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_env() -> Self {
        match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(DEFAULT_CONFIG_DIR),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.dir.join(effective_file_name(file_name))
    }

    pub fn load(&self, file_name: &str) -> Result<LogConfig> {
        let path = self.resolve(file_name);
        debug!("Loading logger config from {}", path.display());

        let content = fs::read(&path).map_err(|source| LoggerError::ConfigNotFound {
            path: path.clone(),
            source,
        })?;
        LogConfig::from_yaml(&content, &path)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_env()
    }
}

pub fn effective_file_name(file_name: &str) -> &str {
    if file_name.is_empty() {
        DEFAULT_CONFIG_FILE
    } else {
        file_name
    }
}
