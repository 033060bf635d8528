//! Unified error type hierarchy for subquote
//!
//! One enum per concern (argument parsing, validation, subtitle reading, cache
//! persistence, quote generation, packaging) plus the umbrella `AppError`
//! that the binaries turn into a user-facing line.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Command line parsing errors.
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("found incomplete or unsupported arguments")]
    Unsupported,

    #[error("couldn't parse specified unit")]
    InvalidUnit,

    #[error("couldn't parse specified length")]
    InvalidLength,

    #[error("subtitle file is required")]
    MissingSubtitle,

    #[error("couldn't determine user's default cache directory (provide it with --cache /path/to/cache)")]
    NoCacheDirectory,
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Input validation failures, collected rather than short-circuited.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .problems.join("; "))]
pub struct ValidationError {
    pub problems: Vec<String>,
}

/// Subtitle reading errors.
#[derive(Error, Debug)]
pub enum SubtitleError {
    #[error("couldn't open subtitle file")]
    Unreadable(#[source] io::Error),
}

/// Chain cache persistence errors.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("couldn't determine subtitle filename")]
    MissingFileName,

    #[error("couldn't open cached file")]
    Open(#[source] io::Error),

    #[error("couldn't deserialize cached file")]
    Deserialize(#[source] serde_json::Error),

    #[error("couldn't create cache file")]
    Create(#[source] io::Error),

    #[error("couldn't write to cache file")]
    Write(#[source] serde_json::Error),

    #[error("couldn't clear cache directory {0}")]
    Clear(PathBuf, #[source] io::Error),
}

/// Quote generation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("couldn't determine the quote starting point")]
    NoStartingPoint,
}

/// Build and installation errors.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("{tool} is required to build subquote but was not found in PATH; install it from https://rustup.rs")]
    BuildToolMissing { tool: String },

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} exited with status {code:?}")]
    BuildFailed { tool: String, code: Option<i32> },

    #[error("build artifact not found at {0}")]
    ArtifactMissing(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Global error type for subquote.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Subtitle(#[from] SubtitleError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error(transparent)]
    Install(#[from] InstallError),
}

impl AppError {
    /// User-facing line printed before exiting with status 1
    pub fn user_message(&self) -> String {
        match self {
            AppError::Args(e) => format!("Error during arguments parsing: {}.", e),
            AppError::Config(e) => format!("Error during arguments parsing: {}.", e),
            AppError::Validation(e) => format!("Error during input validation: [{}].", e),
            AppError::Subtitle(e) => format!("Error during quote generation: [{}].", e),
            AppError::Cache(e) => format!("Error during quote generation: [{}].", e),
            AppError::Quote(e) => format!("Error during quote generation: [{}].", e),
            AppError::Install(e) => format!("Error during installation: {}.", e),
        }
    }
}

/// Top-level result type for operations that may fail.
pub type Result<T> = std::result::Result<T, AppError>;
