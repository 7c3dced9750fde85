use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub debug: bool,
}

pub fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_reads_debug_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"logging":{"debug":true}}"#).unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.logging.debug);
    }

    #[test]
    fn load_config_defaults_to_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = load_config(&path).unwrap();
        assert!(!config.logging.debug);
    }

    #[test]
    fn load_config_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn config_builds_console_logger() {
        use crate::logger::{ConsoleLogger, Logger};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"logging":{"debug":true}}"#).unwrap();

        let config = load_config(&path).unwrap();
        let logger = ConsoleLogger::new(config.logging.debug);
        assert!(logger.is_debug_enabled());
    }
}
