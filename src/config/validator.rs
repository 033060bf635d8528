//! Argument validation.
//!
//! Every check runs even after an earlier one fails, so the user sees all
//! problems at once.

use crate::error::ValidationError;
use crate::models::{ArgSource, RawArguments, Settings};
use std::fs;

/// Validate raw arguments against the filesystem and produce `Settings`.
///
/// A defaulted cache directory that does not exist yet is created; an
/// explicitly provided one must already be a directory.
pub fn validate_arguments(raw: &RawArguments) -> Result<Settings, ValidationError> {
    let mut problems = Vec::new();

    let quote_length = *raw.quote_length.value();
    if quote_length < 1 {
        problems.push(format!(
            "quote length must be greater or equal to 1 (got \"{}\")",
            raw.quote_length
        ));
    }

    let cache_directory = raw.cache_directory.value();
    if !cache_directory.is_dir() {
        match &raw.cache_directory {
            ArgSource::Provided(dir) => problems.push(format!(
                "couldn't read specified cache directory (got \"{}\")",
                dir.display()
            )),
            ArgSource::Default(dir) => match fs::create_dir_all(dir) {
                Ok(()) => log::info!("Created default cache directory at {}", dir.display()),
                Err(e) => {
                    log::debug!("create_dir_all({}) failed: {}", dir.display(), e);
                    problems.push(format!(
                        "couldn't create cache directory (got \"{}\")",
                        dir.display()
                    ))
                }
            },
        }
    }

    if !raw.subtitle.is_file() {
        problems.push(format!(
            "specified subtitle is not a file (got \"{}\")",
            raw.subtitle.display()
        ));
    }

    if !problems.is_empty() {
        return Err(ValidationError { problems });
    }

    Ok(Settings {
        subtitle: raw.subtitle.clone(),
        quote_length: quote_length as usize,
        unit: *raw.unit.value(),
        cache_directory: cache_directory.clone(),
        seed: raw.seed,
    })
}

impl RawArguments {
    /// See [`validate_arguments`].
    pub fn validate(&self) -> Result<Settings, ValidationError> {
        validate_arguments(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn raw(subtitle: &Path, length: i64, cache: ArgSource<PathBuf>) -> RawArguments {
        RawArguments {
            subtitle: subtitle.to_path_buf(),
            quote_length: ArgSource::Provided(length),
            verbose: ArgSource::Default(false),
            unit: ArgSource::Default(Unit::Word),
            cache_directory: cache,
            seed: None,
        }
    }

    #[test]
    fn test_valid_arguments() {
        let temp = tempdir().expect("Failed to create temp dir");
        let subtitle = temp.path().join("movie.srt");
        fs::write(&subtitle, "1\n").expect("Failed to write subtitle");

        let settings = raw(&subtitle, 7, ArgSource::Provided(temp.path().to_path_buf()))
            .validate()
            .expect("arguments should validate");

        assert_eq!(settings.quote_length, 7);
        assert_eq!(settings.unit, Unit::Word);
        assert_eq!(settings.cache_directory, temp.path());
    }

    #[test]
    fn test_default_cache_directory_is_created() {
        let temp = tempdir().expect("Failed to create temp dir");
        let subtitle = temp.path().join("movie.srt");
        fs::write(&subtitle, "1\n").expect("Failed to write subtitle");
        let cache = temp.path().join("cache").join("subquote");

        raw(&subtitle, 5, ArgSource::Default(cache.clone()))
            .validate()
            .expect("arguments should validate");

        assert!(cache.is_dir());
    }

    #[test]
    fn test_uncreatable_default_cache_directory() {
        let temp = tempdir().expect("Failed to create temp dir");
        let subtitle = temp.path().join("movie.srt");
        fs::write(&subtitle, "1\n").expect("Failed to write subtitle");
        let blocker = temp.path().join("file");
        fs::write(&blocker, "").expect("Failed to write blocker");
        let cache = blocker.join("sub");

        let err = raw(&subtitle, 5, ArgSource::Default(cache.clone()))
            .validate()
            .unwrap_err();

        assert_eq!(
            err.problems,
            vec![format!(
                "couldn't create cache directory (got \"{}\")",
                cache.display()
            )]
        );
    }

    #[test]
    fn test_all_problems_are_reported() {
        let temp = tempdir().expect("Failed to create temp dir");
        let missing_cache = temp.path().join("nope");
        let missing_subtitle = temp.path().join("missing.srt");

        let err = raw(&missing_subtitle, 0, ArgSource::Provided(missing_cache.clone()))
            .validate()
            .unwrap_err();

        assert_eq!(err.problems.len(), 3);
        assert_eq!(
            err.problems[0],
            "quote length must be greater or equal to 1 (got \"0\")"
        );
        assert!(err.problems[1].starts_with("couldn't read specified cache directory"));
        assert!(err.problems[2].starts_with("specified subtitle is not a file"));
        assert!(!missing_cache.exists());
    }
}
