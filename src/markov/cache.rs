//! On-disk cache of processed subtitles.
//!
//! Each chain is stored as `<cache dir>/<subtitle name>.<word|char>` in the
//! JSON layout `{"entries":[{"key":"Hello","pairs":["world"]}]}`.

use crate::error::CacheError;
use crate::markov::chain::Chain;
use crate::models::Unit;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Serialized form of a chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entries {
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: String,
    pub pairs: Vec<String>,
}

impl From<&Chain> for Entries {
    fn from(chain: &Chain) -> Self {
        Entries {
            entries: chain
                .iter()
                .map(|(key, pairs)| Entry {
                    key: key.clone(),
                    pairs: pairs.clone(),
                })
                .collect(),
        }
    }
}

impl From<Entries> for Chain {
    fn from(entries: Entries) -> Self {
        let mut chain = Chain::new();
        for entry in entries.entries {
            chain.insert(entry.key, entry.pairs);
        }
        chain
    }
}

/// Chain cache rooted at one directory.
#[derive(Debug, Clone)]
pub struct ChainCache {
    dir: PathBuf,
}

impl ChainCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ChainCache { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file for a subtitle: its file name with the extension swapped
    /// for the unit's (`movie.srt` becomes `movie.word`).
    pub fn path_for(&self, subtitle: &Path, unit: Unit) -> Result<PathBuf, CacheError> {
        let name = subtitle.file_name().ok_or(CacheError::MissingFileName)?;
        let mut path = self.dir.join(name);
        path.set_extension(unit.cache_extension());
        Ok(path)
    }

    /// True when a cache file exists and is not older than the subtitle.
    pub fn is_fresh(&self, cache_path: &Path, subtitle: &Path) -> bool {
        let cached = match fs::metadata(cache_path) {
            Ok(meta) if meta.is_file() => meta,
            _ => return false,
        };
        match (
            cached.modified(),
            fs::metadata(subtitle).and_then(|m| m.modified()),
        ) {
            (Ok(cached_at), Ok(subtitle_at)) => cached_at >= subtitle_at,
            // Without timestamps an existing cache is trusted.
            _ => true,
        }
    }

    pub fn load(&self, path: &Path) -> Result<Chain, CacheError> {
        let file = File::open(path).map_err(CacheError::Open)?;
        let entries: Entries =
            serde_json::from_reader(BufReader::new(file)).map_err(CacheError::Deserialize)?;
        log::info!(
            "Loaded {} cached entries from {}",
            entries.entries.len(),
            path.display()
        );
        Ok(Chain::from(entries))
    }

    /// Write a chain through a temporary file, then rename it into place so
    /// readers never observe a partial document.
    pub fn save(&self, chain: &Chain, path: &Path) -> Result<(), CacheError> {
        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(format!(".tmp{}", std::process::id()));
        let tmp_path = PathBuf::from(tmp_name);

        let file = File::create(&tmp_path).map_err(CacheError::Create)?;
        if let Err(e) = write_entries(chain, file) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            CacheError::Create(e)
        })?;

        log::info!("Saved {} chain entries to {}", chain.len(), path.display());
        Ok(())
    }

    /// Remove every cached chain. Returns how many files were deleted.
    pub fn clear(&self) -> Result<usize, CacheError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(CacheError::Clear(self.dir.clone(), e)),
        };

        let extensions = [Unit::Word.cache_extension(), Unit::Grapheme.cache_extension()];
        let mut removed = 0;
        for entry in entries {
            let path = entry
                .map_err(|e| CacheError::Clear(self.dir.clone(), e))?
                .path();
            let is_chain = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| extensions.contains(&ext));
            if is_chain && path.is_file() {
                fs::remove_file(&path).map_err(|e| CacheError::Clear(path.clone(), e))?;
                log::debug!("Removed {}", path.display());
                removed += 1;
            }
        }
        Ok(removed)
    }
}

/// Serialize a chain as `Entries` JSON and flush it.
fn write_entries<W: Write>(chain: &Chain, out: W) -> Result<(), CacheError> {
    let mut writer = BufWriter::new(out);
    serde_json::to_writer(&mut writer, &Entries::from(chain)).map_err(CacheError::Write)?;
    writer
        .flush()
        .map_err(|e| CacheError::Write(serde_json::Error::io(e)))
}
