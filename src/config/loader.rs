//! Config file loader.

use crate::config::paths;
use crate::error::ConfigError;
use crate::models::Unit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional defaults read from `config.toml`.
///
/// ```toml
/// unit = "char"
/// length = 40
/// cache_directory = "/var/tmp/subquote"
/// verbose = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub unit: Option<Unit>,
    pub length: Option<i64>,
    pub cache_directory: Option<PathBuf>,
    pub verbose: Option<bool>,
}

/// Load config from a TOML file. A missing file yields the empty config.
pub fn load_config_from_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config file at {}", path.display());
            return Ok(FileConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Loaded config file {}", path.display());
    Ok(config)
}

/// Load the config file from its default location, if one can be determined.
pub fn load_default_config() -> Result<FileConfig, ConfigError> {
    match paths::config_file_path() {
        Some(path) => load_config_from_file(&path),
        None => Ok(FileConfig::default()),
    }
}
