//! rps-save: High score persistence
//!
//! Stores the high score ledger as a flat JSON array of integers in the
//! user's home directory.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use rps_core::LedgerStore;

/// File name of the ledger, relative to the home directory
pub const HIGH_SCORES_FILE: &str = ".rps_high_scores.json";

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("High score file not found")]
    NotFound,

    #[error("High score file corrupted: expected a JSON array")]
    Corrupted,

    #[error("No home directory to store high scores in")]
    NoHomeDir,
}

/// Get the default ledger path (`~/.rps_high_scores.json`)
pub fn default_scores_path() -> Result<PathBuf, SaveError> {
    let mut path = dirs::home_dir().ok_or(SaveError::NoHomeDir)?;
    path.push(HIGH_SCORES_FILE);
    Ok(path)
}

/// Load raw ledger entries from a file.
///
/// Integral numbers are kept, fractional numbers are truncated, and anything
/// that is not a number is skipped. Ordering and dedup are left to
/// [`rps_core::HighScores::from_entries`].
pub fn load_scores(path: impl AsRef<Path>) -> Result<Vec<u32>, SaveError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SaveError::NotFound,
        _ => SaveError::Io(e),
    })?;
    let reader = BufReader::new(file);
    let value: Value = serde_json::from_reader(reader)?;

    let Value::Array(items) = value else {
        return Err(SaveError::Corrupted);
    };

    Ok(items.iter().filter_map(entry_to_score).collect())
}

fn entry_to_score(value: &Value) -> Option<u32> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return u32::try_from(u).ok();
    }
    let f = n.as_f64()?;
    if f >= 1.0 && f <= u32::MAX as f64 {
        Some(f.trunc() as u32)
    } else {
        None
    }
}

/// Write ledger entries to a file, replacing its contents
pub fn save_scores(path: impl AsRef<Path>, entries: &[u32]) -> Result<(), SaveError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, entries)?;
    writer.flush()?;
    Ok(())
}

/// [`LedgerStore`] backed by a JSON file.
///
/// Read failures yield an empty ledger and write failures are dropped; both
/// are only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: Option<PathBuf>,
}

impl JsonFileStore {
    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store at `~/.rps_high_scores.json`, or a disabled store if there is
    /// no home directory
    pub fn default_location() -> Self {
        match default_scores_path() {
            Ok(path) => Self::at(path),
            Err(e) => {
                log::warn!("high scores will not be saved: {}", e);
                Self::disabled()
            }
        }
    }

    /// Store that never reads or writes anything
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&mut self) -> Vec<u32> {
        let Some(path) = &self.path else {
            return Vec::new();
        };
        match load_scores(path) {
            Ok(entries) => entries,
            Err(SaveError::NotFound) => {
                log::debug!("no high score file at {}", path.display());
                Vec::new()
            }
            Err(e) => {
                log::warn!("ignoring high score file {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, entries: &[u32]) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = save_scores(path, entries) {
            log::warn!("failed to save high scores to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("rps_test_{}_{}.json", std::process::id(), name))
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save_and_load");

        save_scores(&path, &[7, 3, 1]).unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[7,3,1]");
        assert_eq!(load_scores(&path).unwrap(), vec![7, 3, 1]);

        // Cleanup
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_nonexistent() {
        let result = load_scores("/nonexistent/path/scores.json");
        assert!(matches!(result, Err(SaveError::NotFound)));
    }

    #[test]
    fn test_load_unreadable_is_io_error() {
        // Parent is a regular file, so the open fails with ENOTDIR
        let parent = temp_path("not_a_dir");
        std::fs::write(&parent, "[]").unwrap();
        let result = load_scores(parent.join("scores.json"));
        assert!(matches!(result, Err(SaveError::Io(_))));
        std::fs::remove_file(&parent).ok();
    }

    #[test]
    fn test_load_not_an_array() {
        let path = temp_path("not_array");
        std::fs::write(&path, r#"{"scores": [1, 2]}"#).unwrap();
        assert!(matches!(load_scores(&path), Err(SaveError::Corrupted)));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_garbage() {
        let path = temp_path("garbage");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(matches!(load_scores(&path), Err(SaveError::Serialization(_))));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_mixed_entries() {
        let path = temp_path("mixed");
        std::fs::write(&path, r#"[4, "x", 2.9, null, -3, 0, 6]"#).unwrap();
        assert_eq!(load_scores(&path).unwrap(), vec![4, 2, 0, 6]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_out_of_range_entries_dropped() {
        let path = temp_path("out_of_range");
        std::fs::write(&path, "[4294967295, 4294967296, 4294967296.0, 1e12, 5]").unwrap();
        assert_eq!(load_scores(&path).unwrap(), vec![u32::MAX, 5]);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_store_swallows_corruption() {
        let path = temp_path("store_corrupt");
        std::fs::write(&path, "[1, 2").unwrap();
        let mut store = JsonFileStore::at(&path);
        assert!(store.load().is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_store_ignores_unwritable_path() {
        let mut store = JsonFileStore::at("/nonexistent/dir/scores.json");
        store.save(&[3]);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_disabled_store() {
        let mut store = JsonFileStore::disabled();
        assert_eq!(store.path(), None);
        store.save(&[1]);
        assert!(store.load().is_empty());
    }
}
