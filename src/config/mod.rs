//! Configuration for a quote run.
//!
//! Settings come from three places, highest priority first:
//!
//! 1. Command line flags (see [`crate::cli`])
//! 2. The optional TOML config file (`loader`)
//! 3. Built-in defaults (`paths` for the cache directory, [`crate::models::Unit`] for the rest)
//!
//! # Module Structure
//!
//! - `paths`: default cache directory and config file locations
//! - `loader`: reads the TOML config file
//! - `validator`: checks raw arguments against the filesystem and yields `Settings`

pub mod loader;
pub mod paths;
pub mod validator;

pub use loader::FileConfig;
pub use validator::validate_arguments;
