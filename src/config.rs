use crate::operation::Strategy;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file read from the working directory when `REWIND_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.json";
pub const CONFIG_ENV: &str = "REWIND_CONFIG";

const DEFAULT_MAX_DEPTH: usize = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Malformed config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Settings for one editing session.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Undo steps to keep; `null` keeps everything.
    pub max_depth: Option<usize>,
    pub strategy: Strategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            strategy: Strategy::Delta,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub engine: EngineConfig,
    pub tick_rate_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            tick_rate_ms: 100,
            log_file: None,
            log_filter: "rewind=info".into(),
        }
    }
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file named by `REWIND_CONFIG`, else `rewind.json` if it
    /// exists, else the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1 (use null for unbounded)".into(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tick_rate_ms must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_json(
            r#"{
                "max_depth": 5,
                "strategy": "snapshot",
                "tick_rate_ms": 250,
                "log_file": "rewind.log",
                "log_filter": "rewind=debug"
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.engine,
            EngineConfig {
                max_depth: Some(5),
                strategy: Strategy::Snapshot,
            }
        );
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.log_file, Some(PathBuf::from("rewind.log")));
        assert_eq!(config.log_filter, "rewind=debug");
    }

    #[test]
    fn test_null_max_depth_is_unbounded() {
        let config = Config::from_json(r#"{ "max_depth": null }"#).unwrap();
        assert_eq!(config.engine.max_depth, None);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            Config::from_json(r#"{ "max_depth": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "tick_rate_ms": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "strategy": "undo-tree" }"#),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_depth": 3 }}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.engine.max_depth, Some(3));
        assert_eq!(config.engine.strategy, Strategy::Delta);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
