use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the configuration file location
pub const CONFIG_PATH_ENV: &str = "DECKS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Root service configuration loaded from YAML
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub decks: DecksConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub server_port: String,
}

/// Names of the suits and values a deck is built from.
///
/// The first character of every name becomes its code, so suit names must not
/// share a first character with each other, and neither may value names.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DecksConfig {
    pub suits: Vec<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("bad configuration, {group} names {first:?} and {second:?} both start with {code:?}")]
    AmbiguousCode {
        group: &'static str,
        code: char,
        first: String,
        second: String,
    },
}

impl Config {
    /// Resolves the configuration path from the environment, falling back to `config.yaml`
    pub fn path_from_env() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load and validate configuration from a YAML file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_reader(BufReader::new(file)).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the fields that serde cannot. Code collisions are reported by the catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.server_port.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "api.server_port must not be empty".to_string(),
            ));
        }
        validate_names("decks.suits", &self.decks.suits)?;
        validate_names("decks.values", &self.decks.values)?;
        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.api.server_port.trim())
    }
}

fn validate_names(field: &str, names: &[String]) -> Result<(), ConfigError> {
    if names.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must not be empty")));
    }
    if names.iter().any(|name| name.is_empty()) {
        return Err(ConfigError::Invalid(format!(
            "{field} must not contain empty names"
        )));
    }
    Ok(())
}
