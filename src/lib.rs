//! subquote
//!
//! Prints a random "quote" assembled from the dialogue of a SubRip subtitle.
//! The dialogue feeds a first-order Markov chain of words or characters that
//! is cached on disk, so later runs on the same subtitle skip parsing.
//!
//! The crate is organized into functional modules:
//! - **error**: Unified error type hierarchy
//! - **models**: Core data types (units, arguments, settings)
//! - **cli**: Command line parsing
//! - **config**: Defaults, config file and argument validation
//! - **subtitle**: SubRip parsing and tokenization
//! - **markov**: Chain construction, caching and quote generation
//! - **engine**: The end-to-end quote pipeline
//! - **install**: Building and installing the binary
//! - **logger**: Stderr backend for the `log` facade

pub mod error;
pub mod models;

pub mod cli;
pub mod config;

pub mod subtitle;
pub mod markov;
pub mod engine;

pub mod install;

pub mod logger;

// Re-export the log crate for macro usage
pub use log;

// ============================================================================
// PUBLIC RE-EXPORTS FOR CONVENIENCE
// ============================================================================

pub use error::{
    AppError, ArgsError, CacheError, ConfigError, InstallError, QuoteError, Result,
    SubtitleError, ValidationError,
};

pub use models::{ArgSource, RawArguments, Settings, Unit};

pub use engine::{get_quote, load_or_build_chain};

pub use markov::{generate_quote, Chain, ChainCache};

pub use install::{BuildTool, InstallLayout};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
