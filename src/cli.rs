//! Command line interface of the `subquote` binary.

use crate::config::{paths, FileConfig};
use crate::error::ArgsError;
use crate::models::{ArgSource, RawArguments, Unit};
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Print a random quote built from a SubRip subtitle.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "subquote", version, override_usage = "subquote FILE.srt [options]")]
pub struct Cli {
    /// SubRip subtitle to build the quote from
    #[arg(value_name = "FILE.srt")]
    pub subtitle: Option<PathBuf>,

    // Kept as text so an unparsable or negative value gets our own message.
    #[arg(short = 'l', long = "length", value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    #[arg(short = 'u', long = "unit", value_name = "UNIT")]
    pub unit: Option<String>,

    #[arg(long = "cache", value_name = "DIR")]
    pub cache: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Seed the random generator for a reproducible quote
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Remove every cached chain from the cache directory and exit
    #[arg(long = "clear-cache")]
    pub clear_cache: bool,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum ParseOutcome {
    Run(Cli),
    /// Help or version text to print before exiting successfully
    Exit(String),
}

/// Build the clap command, with help texts that show the current defaults.
pub fn command() -> clap::Command {
    let cache_help = match paths::default_cache_directory() {
        Some(dir) => format!(
            "Specify where to save processed subtitles (default {})",
            dir.display()
        ),
        None => "Specify where to save processed subtitles".to_string(),
    };

    Cli::command()
        .mut_arg("length", |arg| {
            arg.help(format!(
                "Maximum quote length (default: {})",
                Unit::default().default_quote_length()
            ))
        })
        .mut_arg("unit", |arg| {
            arg.help(format!(
                "Unit used to build the quote: \"word\" or \"char\" (default: {})",
                Unit::default()
            ))
        })
        .mut_arg("cache", |arg| arg.help(cache_help))
        .mut_arg("verbose", |arg| arg.help("Be verbose (default: false)"))
}

/// Parse the process arguments (program name first).
pub fn parse_args<I, T>(args: I) -> Result<ParseOutcome, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(ParseOutcome::Exit(e.render().to_string()))
                }
                _ => {
                    log::debug!("clap rejected arguments: {}", e);
                    Err(ArgsError::Unsupported)
                }
            };
        }
    };

    let cli = Cli::from_arg_matches(&matches).map_err(|_| ArgsError::Unsupported)?;
    Ok(ParseOutcome::Run(cli))
}

impl Cli {
    /// Merge flags with the config file and built-in defaults.
    pub fn into_raw(
        self,
        config: &FileConfig,
        default_cache: Option<PathBuf>,
    ) -> Result<RawArguments, ArgsError> {
        let verbose = if self.verbose {
            ArgSource::Provided(true)
        } else {
            ArgSource::Default(config.verbose.unwrap_or(false))
        };

        let unit = match self.unit {
            Some(text) => ArgSource::Provided(
                text.parse::<Unit>().map_err(|_| ArgsError::InvalidUnit)?,
            ),
            None => ArgSource::Default(config.unit.unwrap_or_default()),
        };

        let quote_length = match self.length {
            Some(text) => ArgSource::Provided(
                text.trim()
                    .parse::<i64>()
                    .map_err(|_| ArgsError::InvalidLength)?,
            ),
            None => ArgSource::Default(
                config
                    .length
                    .unwrap_or(unit.value().default_quote_length() as i64),
            ),
        };

        let cache_directory = match self.cache {
            Some(dir) => ArgSource::Provided(dir),
            None => config
                .cache_directory
                .clone()
                .or(default_cache)
                .map(ArgSource::Default)
                .ok_or(ArgsError::NoCacheDirectory)?,
        };

        let subtitle = self.subtitle.ok_or(ArgsError::MissingSubtitle)?;

        Ok(RawArguments {
            subtitle,
            quote_length,
            verbose,
            unit,
            cache_directory,
            seed: self.seed,
        })
    }
}
