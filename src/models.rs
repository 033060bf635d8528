//! Core data types for subquote.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Granularity of the Markov chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Word,
    #[serde(rename = "char")]
    Grapheme,
}

impl Unit {
    /// Quote length used when none is given
    pub fn default_quote_length(self) -> usize {
        match self {
            Unit::Word => 5,
            Unit::Grapheme => 25,
        }
    }

    /// Extension of the cache file holding a chain of this unit
    pub fn cache_extension(self) -> &'static str {
        match self {
            Unit::Word => "word",
            Unit::Grapheme => "char",
        }
    }

    /// Separator placed between units of a generated quote
    pub fn joiner(self) -> &'static str {
        match self {
            Unit::Word => " ",
            Unit::Grapheme => "",
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    /// Parses the command line spelling: `word` or `char`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "word" => Ok(Unit::Word),
            "char" => Ok(Unit::Grapheme),
            other => Err(format!("unknown unit: {}", other)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::Word => write!(f, "word"),
            Unit::Grapheme => write!(f, "grapheme"),
        }
    }
}

/// Where a setting came from: the user, or a default (built-in or config file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgSource<T> {
    Provided(T),
    Default(T),
}

impl<T> ArgSource<T> {
    pub fn value(&self) -> &T {
        match self {
            ArgSource::Provided(v) | ArgSource::Default(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            ArgSource::Provided(v) | ArgSource::Default(v) => v,
        }
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, ArgSource::Provided(_))
    }
}

impl<T: fmt::Display> fmt::Display for ArgSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Arguments as parsed, before any filesystem check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArguments {
    pub subtitle: PathBuf,
    pub quote_length: ArgSource<i64>,
    pub verbose: ArgSource<bool>,
    pub unit: ArgSource<Unit>,
    pub cache_directory: ArgSource<PathBuf>,
    pub seed: Option<u64>,
}

/// Validated settings driving a quote run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub subtitle: PathBuf,
    pub quote_length: usize,
    pub unit: Unit,
    pub cache_directory: PathBuf,
    pub seed: Option<u64>,
}
