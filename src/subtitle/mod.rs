//! SubRip (`.srt`) subtitle handling.

pub mod parser;

pub use parser::{parse_subtitle, read_subtitle};
