//! Integration tests for the `subquote` binary.
//!
//! Each test runs the real executable with an isolated cache directory
//! (`XDG_CACHE_HOME`) and config file (`SUBQUOTE_CONFIG`).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/jaws.srt")
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Sandbox {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn cache_home(&self) -> PathBuf {
        self.dir.path().join("xdg-cache")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_subquote"))
            .args(args)
            .env("XDG_CACHE_HOME", self.cache_home())
            .env("SUBQUOTE_CONFIG", self.config_path())
            .env_remove("SUBQUOTE_LOG")
            .output()
            .expect("Failed to run subquote")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_prints_quote_and_caches_chain() {
    let sandbox = Sandbox::new();
    let subtitle = fixture();

    let output = sandbox.run(&[subtitle.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let quote = stdout(&output);
    let quote = quote.trim_end();
    assert!(quote.chars().next().unwrap().is_uppercase());
    assert!(quote.ends_with(['.', '!', '?']));
    assert!(quote.split(' ').count() <= 5);
    assert!(sandbox.cache_home().join("subquote/jaws.word").is_file());
}

#[test]
fn test_seed_is_reproducible() {
    let sandbox = Sandbox::new();
    let subtitle = fixture();
    let args = [subtitle.to_str().unwrap(), "--seed", "42", "-l", "8"];

    let first = sandbox.run(&args);
    let second = sandbox.run(&args);

    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
}

#[test]
fn test_verbose_reports_cache_creation() {
    let sandbox = Sandbox::new();
    let subtitle = fixture();

    let output = sandbox.run(&[subtitle.to_str().unwrap(), "-v"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("Created default cache directory at"));
}

#[test]
fn test_char_unit_uses_char_cache() {
    let sandbox = Sandbox::new();
    let subtitle = fixture();

    let output = sandbox.run(&[subtitle.to_str().unwrap(), "-u", "char"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(sandbox.cache_home().join("subquote/jaws.char").is_file());
    assert!(stdout(&output).trim_end().chars().count() <= 26);
}

#[test]
fn test_config_file_sets_unit() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.config_path(), "unit = \"char\"\n").unwrap();
    let subtitle = fixture();

    let output = sandbox.run(&[subtitle.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(sandbox.cache_home().join("subquote/jaws.char").is_file());
}

#[test]
fn test_missing_subtitle_argument() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output).trim_end(),
        "Error during arguments parsing: subtitle file is required."
    );
}

#[test]
fn test_unparsable_options() {
    let sandbox = Sandbox::new();
    let subtitle = fixture();
    let subtitle = subtitle.to_str().unwrap();

    let output = sandbox.run(&[subtitle, "-l", "many"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("couldn't parse specified length"));

    let output = sandbox.run(&[subtitle, "-u", "line"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("couldn't parse specified unit"));

    let output = sandbox.run(&[subtitle, "--frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("found incomplete or unsupported arguments"));
}

#[test]
fn test_validation_reports_every_problem() {
    let sandbox = Sandbox::new();
    let missing_cache = sandbox.dir.path().join("no-such-dir");

    let output = sandbox.run(&[
        "missing.srt",
        "-l",
        "0",
        "--cache",
        missing_cache.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(message.starts_with("Error during input validation: [quote length must be greater or equal to 1 (got \"0\"); couldn't read specified cache directory"));
    assert!(message.contains("; specified subtitle is not a file (got \"missing.srt\")]."));
}

#[test]
fn test_help_succeeds() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["--help"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Usage: subquote FILE.srt [options]"));
}

#[test]
fn test_version_succeeds() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["--version"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with(concat!("subquote ", env!("CARGO_PKG_VERSION"))));
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_clear_cache() {
    let sandbox = Sandbox::new();
    let subtitle = fixture();
    assert!(sandbox.run(&[subtitle.to_str().unwrap()]).status.success());

    let output = sandbox.run(&["--clear-cache"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("Removed 1 cached chains"));
    assert!(!sandbox.cache_home().join("subquote/jaws.word").exists());
}
