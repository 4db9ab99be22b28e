//! Logger setup shared by the solvers: terminal output plus an optional log file.
use crate::errors::OdeError;
use chrono::Local;
use simplelog::*;
use std::fs::File;

/// `log_<date>_<time>.txt`
pub fn default_log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Maps a level name to a filter; `"off"` and `"none"` mean no logging at all.
pub fn parse_loglevel(level: &str) -> Result<Option<LevelFilter>, OdeError> {
    match level.to_lowercase().as_str() {
        "off" | "none" => Ok(None),
        "trace" => Ok(Some(LevelFilter::Trace)),
        "debug" => Ok(Some(LevelFilter::Debug)),
        "info" => Ok(Some(LevelFilter::Info)),
        "warn" => Ok(Some(LevelFilter::Warn)),
        "error" => Ok(Some(LevelFilter::Error)),
        other => Err(OdeError::Config(format!(
            "loglevel must be off, none, trace, debug, info, warn or error, got {}",
            other
        ))),
    }
}

/// Installs a `CombinedLogger`. Returns `false` if a global logger was already set,
/// which is not an error: the existing one keeps working. A log file that can not be
/// created is a `Config` error.
pub fn init_logger(level: LevelFilter, log_file: Option<&str>) -> Result<bool, OdeError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));
    if let Some(filename) = log_file {
        let file = File::create(filename).map_err(|err| {
            OdeError::Config(format!("can not create log file {}: {}", filename, err))
        })?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    Ok(CombinedLogger::init(loggers).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_loglevel() {
        assert_eq!(parse_loglevel("off").unwrap(), None);
        assert_eq!(parse_loglevel("None").unwrap(), None);
        assert_eq!(parse_loglevel("debug").unwrap(), Some(LevelFilter::Debug));
        assert_eq!(parse_loglevel("WARN").unwrap(), Some(LevelFilter::Warn));
        assert!(matches!(parse_loglevel("loud"), Err(OdeError::Config(_))));
    }

    #[test]
    fn test_default_log_file_name() {
        let name = default_log_file_name();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_second_init_is_harmless() {
        init_logger(LevelFilter::Warn, None).unwrap();
        assert!(!init_logger(LevelFilter::Warn, None).unwrap());
    }

    #[test]
    fn test_log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(default_log_file_name());
        init_logger(LevelFilter::Warn, path.to_str()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        assert!(matches!(
            init_logger(LevelFilter::Warn, path.to_str()),
            Err(OdeError::Config(_))
        ));
    }
}
