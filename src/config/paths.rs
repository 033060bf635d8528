//! Well-known locations: the chain cache directory and the config file.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Directory name used under the user's cache and config directories
pub const APP_DIR: &str = "subquote";

/// File name of the config file inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "SUBQUOTE_CONFIG";

/// Default cache directory: `$XDG_CACHE_HOME/subquote`, falling back to the
/// platform cache directory.
///
/// Returns `None` when neither can be determined.
pub fn default_cache_directory() -> Option<PathBuf> {
    cache_directory_from(env::var_os("XDG_CACHE_HOME"), dirs::cache_dir())
}

fn cache_directory_from(xdg: Option<OsString>, platform: Option<PathBuf>) -> Option<PathBuf> {
    xdg.and_then(|value| value.into_string().ok())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or(platform)
        .map(|base| base.join(APP_DIR))
}

/// Config file location: `$SUBQUOTE_CONFIG`, else `<config dir>/subquote/config.toml`.
pub fn config_file_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)),
    }
}
