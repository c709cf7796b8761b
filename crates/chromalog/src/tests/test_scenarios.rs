use tempfile::TempDir;

use super::{
    config_with,
    read_rows,
    Capture,
};
use crate::logger::Logger;
use crate::severity::Severity;

fn build(config: crate::config::LogConfig) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder(config)
        .console(capture.clone())
        .build()
        .unwrap();
    capture.clear();
    (logger, capture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_threshold_without_file() {
        let (logger, capture) = build(config_with("warning", None));

        logger.log(Severity::Info, "hello");
        assert!(capture.text().is_empty());

        logger.log(Severity::Error, "boom");
        let lines = capture.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("boom"));
        assert!(logger.log_file_path().is_none());
    }

    #[test]
    fn test_info_threshold_writes_one_row() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_with("info", None);
        config.log_settings.log_file_bool = true;
        config.log_settings.log_file_name =
            temp_dir.path().join("out").to_string_lossy().into_owned();
        config.log_settings.log_file_extension = ".csv".to_string();
        let (logger, _capture) = build(config);

        logger.log(Severity::Info, "start");

        let path = temp_dir.path().join("out.csv");
        assert_eq!(logger.log_file_path(), Some(path.as_path()));
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], "INFO");
        assert_eq!(rows[0][2], "start");
    }

    #[test]
    fn test_unknown_level_emits_everything() {
        let (logger, capture) = build(config_with("trace", None));

        assert_eq!(logger.threshold(), Severity::Default);
        for severity in Severity::ALL {
            logger.log(severity, "msg");
        }

        let lines = capture.lines();
        assert_eq!(lines.len(), Severity::ALL.len());
        for (line, severity) in lines.iter().zip(Severity::ALL) {
            assert!(line.contains(severity.name()), "{line}");
        }
    }

    #[test]
    fn test_unrecognized_color_renders_plain() {
        let mut config = config_with("info", None);
        config.log_colors.info_color = "purple".to_string();
        let (logger, capture) = build(config);

        assert!(logger.style(Severity::Info).is_neutral());

        logger.info("colorless");
        let line = capture.text();
        assert!(line.contains("] INFO colorless -> "));
    }

    #[test]
    fn test_threshold_filter_for_every_pair() {
        for threshold in Severity::ALL {
            let level = match threshold {
                Severity::Default => "",
                other => other.name(),
            };
            let (logger, capture) = build(config_with(level, None));
            assert_eq!(logger.threshold(), threshold);

            for severity in Severity::ALL {
                capture.clear();
                logger.log(severity, "probe");
                assert_eq!(
                    !capture.text().is_empty(),
                    severity >= threshold,
                    "severity {severity} threshold {threshold}"
                );
            }
        }
    }

    #[test]
    fn test_console_line_names_caller_file() {
        let (logger, capture) = build(config_with("", None));

        logger.danger("meltdown");

        assert!(capture.text().trim_end().ends_with(&format!("-> {}", file!())));
    }
}
