//! Stderr logger behind the `log` facade.
//!
//! All `log::info!()`, `log::warn!()` and friends end up here, formatted as
//! `[HH:MM:SS.mmm] [LEVEL] message`. Stdout stays reserved for the quote.

use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

/// Environment variable that overrides the log level (`error`, `warn`, `info`, `debug`, `trace`)
pub const LOG_ENV: &str = "SUBQUOTE_LOG";

/// A line-oriented logger writing to stderr
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        StderrLogger { level }
    }

    fn format(record: &Record) -> String {
        format!(
            "[{}] [{}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(stderr, "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Pick the level: `SUBQUOTE_LOG` if it parses, else `Info` when verbose, else `Warn`.
pub fn level_for(verbose: bool, env_value: Option<&str>) -> LevelFilter {
    if let Some(level) = env_value.and_then(|value| value.trim().parse::<LevelFilter>().ok()) {
        return level;
    }
    if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Install the stderr logger as the global logger.
///
/// The logger itself accepts every level; filtering happens through
/// `log::max_level()` so [`set_level`] can adjust it later.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(StderrLogger::new(LevelFilter::Trace)))
        .map(|()| log::set_max_level(level))
}

/// Change the level once settings are known (e.g. `verbose` from the config file).
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
