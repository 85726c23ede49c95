//! `cricstats.toml` loading.
//!
//! ```toml
//! [data]
//! players = "data/batting.csv"
//! matches = "data/world_cup.csv"
//!
//! [query]
//! top_n = 10
//! min_innings = 20
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cricstats_model::QueryOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cricstats.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub query: QueryOptions,
}

/// Source file locations. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub players: Option<PathBuf>,
    pub matches: Option<PathBuf>,
}

impl AppConfig {
    /// Loads `explicit`, or [`DEFAULT_CONFIG_FILE`] when it exists.
    ///
    /// # Errors
    ///
    /// An explicitly named file must be readable. Any file that is read must
    /// parse.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AppConfig::parse("[query]\nmin_innings = 50\n").expect("parse");
        assert_eq!(config.query.min_innings, 50);
        assert_eq!(config.query.top_n, 10);
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn data_paths_parse() {
        let config = AppConfig::parse("[data]\nplayers = \"odi.csv\"\n").expect("parse");
        assert_eq!(config.data.players, Some(PathBuf::from("odi.csv")));
        assert_eq!(config.data.matches, None);
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(AppConfig::parse("[query]\ntop_n = \"ten\"\n").is_err());
    }
}
