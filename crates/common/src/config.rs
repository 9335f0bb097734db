//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PoslogError, PoslogResult};

/// Log file read when no input path is given.
pub const DEFAULT_INPUT_PATH: &str = "useful.log";

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input selection and line matching.
    pub input: InputConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Input parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Log file to analyze, relative paths resolve against the working directory.
    pub path: PathBuf,

    /// Skip lines without a `Vec3(..), rotation:` record instead of failing.
    pub skip_unmatched: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "debug", "poslog=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INPUT_PATH),
            skip_unmatched: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    ///
    /// A missing file is not a problem. A file that cannot be read or parsed
    /// is returned as [`PoslogError::InvalidConfig`] next to the defaults, so
    /// the caller can report it once logging is up.
    pub fn load() -> (Self, Option<PoslogError>) {
        let config_path = config_file_path();
        if !config_path.exists() {
            return (Self::default(), None);
        }
        match Self::load_from(&config_path) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(PoslogError::InvalidConfig {
                    path: config_path,
                    message: e.to_string(),
                }),
            ),
        }
    }

    /// Load config from an explicit file. Unlike [`AppConfig::load`], failures are errors.
    pub fn load_from(path: impl AsRef<Path>) -> PoslogResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PoslogError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("poslog").join("config.json")
}
