use std::fs;

use tempfile::TempDir;

use crate::config::ConfigLoader;
use crate::error::LoggerError;
use crate::logger::Logger;
use crate::severity::Severity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_with_missing_config() {
        let temp_dir = TempDir::new().unwrap();

        let result = Logger::initialize_with(&ConfigLoader::new(temp_dir.path()), "nope.yaml");

        assert!(matches!(result, Err(LoggerError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_initialize_with_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bad.yaml"), "log_settings: [1, 2").unwrap();

        let result = Logger::initialize_with(&ConfigLoader::new(temp_dir.path()), "bad.yaml");

        assert!(matches!(result, Err(LoggerError::ConfigParse { .. })));
    }

    #[test]
    fn test_initialize_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let log_base = temp_dir.path().join("app");
        let yaml = format!(
            "log_settings:\n  log_level: Error\n  log_file_bool: true\n  log_file_name: '{}'\n  log_file_extension: .log\nlog_colors:\n  error_color: red\n",
            log_base.display()
        );
        fs::write(temp_dir.path().join("config.yaml"), yaml).unwrap();

        let logger = Logger::initialize_with(&ConfigLoader::new(temp_dir.path()), "").unwrap();

        assert_eq!(logger.threshold(), Severity::Error);
        assert!(!logger.style(Severity::Error).is_neutral());
        assert!(logger.style(Severity::Info).is_neutral());
        assert_eq!(
            logger.log_file_path(),
            Some(temp_dir.path().join("app.log").as_path())
        );
        assert!(temp_dir.path().join("app.log").exists());
        logger.close();
    }
}
