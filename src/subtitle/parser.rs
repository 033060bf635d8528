//! SubRip parser that extracts dialogue tokens.
//!
//! A SubRip file is a sequence of blocks:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:03,500
//! <i>Hello there,</i> "friend".
//!
//! ```
//!
//! Index lines, timing lines and blank lines are structural and dropped.
//! Dialogue lines are cleaned of quotes, markup tags, commas and hyphens,
//! then split into units. Each dialogue line becomes its own token sequence.

use crate::error::SubtitleError;
use crate::models::Unit;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

static STRUCTURAL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2}:\d{2}:\d{2},\d{3}\s-->\s\d{2}:\d{2}:\d{2},\d{3}|\d+|)$")
        .expect("structural line regex is valid")
});

static NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""\s?|<.*>\s?|,|-"#).expect("noise regex is valid"));

/// True for index, timing and blank lines.
pub fn is_structural_line(line: &str) -> bool {
    STRUCTURAL_LINE.is_match(line.trim_end_matches('\r'))
}

/// Strip quotes, markup tags, commas and hyphens from a dialogue line.
pub fn clean_line(line: &str) -> Cow<'_, str> {
    NOISE.replace_all(line, "")
}

/// Split a cleaned dialogue line into units.
///
/// Words are whitespace separated. Graphemes are the line's characters, with
/// every run of whitespace collapsed into a single `" "` unit.
pub fn tokenize(line: &str, unit: Unit) -> Vec<String> {
    match unit {
        Unit::Word => line.split_whitespace().map(str::to_string).collect(),
        Unit::Grapheme => {
            let mut units = Vec::new();
            let mut pending_space = false;
            for c in line.trim().chars() {
                if c.is_whitespace() {
                    pending_space = true;
                    continue;
                }
                if pending_space {
                    units.push(" ".to_string());
                    pending_space = false;
                }
                units.push(c.to_string());
            }
            units
        }
    }
}

/// Extract one token sequence per dialogue line.
pub fn parse_subtitle(content: &str, unit: Unit) -> Vec<Vec<String>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !is_structural_line(line))
        .map(|line| tokenize(&clean_line(line), unit))
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

/// Read and parse a subtitle file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_subtitle(path: &Path, unit: Unit) -> Result<Vec<Vec<String>>, SubtitleError> {
    let bytes = fs::read(path).map_err(SubtitleError::Unreadable)?;
    let content = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = content {
        log::warn!(
            "{} is not valid UTF-8, undecodable bytes were replaced",
            path.display()
        );
    }

    let sequences = parse_subtitle(&content, unit);
    log::info!(
        "Parsed {} dialogue lines from {}",
        sequences.len(),
        path.display()
    );
    Ok(sequences)
}
