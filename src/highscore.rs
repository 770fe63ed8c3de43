//! Highscore persistence: a plain-text file holding one base-10 integer.

use crate::constants::HIGHSCORE_FILE;
use crate::utils::persistence;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors at the highscore file boundary.
#[derive(Error, Debug)]
pub enum HighscoreError {
    #[error("highscore I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("highscore file does not hold a non-negative integer: {0:?}")]
    Malformed(String),
}

/// Somewhere a single highscore can be read from and written to.
pub trait HighscoreStore {
    /// Stored highscore; `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<u32>, HighscoreError>;

    fn save(&mut self, score: u32) -> Result<(), HighscoreError>;
}

/// Parse the file content. Surrounding whitespace is allowed.
pub fn parse_highscore(content: &str) -> Result<u32, HighscoreError> {
    let trimmed = content.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| HighscoreError::Malformed(trimmed.to_string()))
}

/// Highscore kept in a text file.
#[derive(Debug, Clone)]
pub struct FileHighscore {
    path: PathBuf,
}

impl FileHighscore {
    /// Store in the default data directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: persistence::data_path(HIGHSCORE_FILE)?,
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighscoreStore for FileHighscore {
    fn load(&self) -> Result<Option<u32>, HighscoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_highscore(&content).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, score: u32) -> Result<(), HighscoreError> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

/// In-memory store, for tests and for running without a data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighscore {
    pub value: Option<u32>,
    pub writes: u32,
}

impl MemoryHighscore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }
}

impl HighscoreStore for MemoryHighscore {
    fn load(&self) -> Result<Option<u32>, HighscoreError> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<(), HighscoreError> {
        self.value = Some(score);
        self.writes += 1;
        Ok(())
    }
}

/// Outcome of comparing a finished round against the stored highscore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighscoreUpdate {
    /// Highscore to display (the larger of stored and current).
    pub highscore: u32,
    /// The round beat the stored value.
    pub is_record: bool,
}

/// Compare `score` with the stored highscore and overwrite it when beaten.
///
/// Unreadable or malformed content counts as zero; write failures are
/// logged and otherwise ignored. The round's result never depends on I/O.
pub fn record(store: &mut dyn HighscoreStore, score: u32) -> HighscoreUpdate {
    let stored = match store.load() {
        Ok(value) => value.unwrap_or(0),
        Err(e) => {
            log::warn!("Treating highscore as 0: {}", e);
            0
        }
    };

    if score <= stored {
        return HighscoreUpdate {
            highscore: stored,
            is_record: false,
        };
    }

    if let Err(e) = store.save(score) {
        log::warn!("Could not save highscore {}: {}", score, e);
    }
    HighscoreUpdate {
        highscore: score,
        is_record: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_highscore("5").unwrap(), 5);
        assert_eq!(parse_highscore(" 42\n").unwrap(), 42);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_highscore("-3"),
            Err(HighscoreError::Malformed(_))
        ));
        assert!(matches!(
            parse_highscore("ten"),
            Err(HighscoreError::Malformed(_))
        ));
        assert!(matches!(parse_highscore(""), Err(HighscoreError::Malformed(_))));
    }

    #[test]
    fn test_record_beats_stored() {
        let mut store = MemoryHighscore::with_value(5);
        let update = record(&mut store, 7);
        assert_eq!(
            update,
            HighscoreUpdate {
                highscore: 7,
                is_record: true
            }
        );
        assert_eq!(store.value, Some(7));
    }

    #[test]
    fn test_record_keeps_higher_stored() {
        let mut store = MemoryHighscore::with_value(5);
        let update = record(&mut store, 3);
        assert_eq!(update.highscore, 5);
        assert!(!update.is_record);
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_tie_does_not_rewrite() {
        let mut store = MemoryHighscore::with_value(5);
        assert!(!record(&mut store, 5).is_record);
        assert_eq!(store.writes, 0);
    }

    #[test]
    fn test_empty_store_zero_score_not_written() {
        let mut store = MemoryHighscore::new();
        let update = record(&mut store, 0);
        assert_eq!(update.highscore, 0);
        assert_eq!(store.value, None);
    }

    #[test]
    fn test_file_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHighscore::at(dir.path().join(HIGHSCORE_FILE));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_malformed_counts_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HIGHSCORE_FILE);
        fs::write(&path, "lots").unwrap();
        let mut store = FileHighscore::at(&path);

        assert!(matches!(store.load(), Err(HighscoreError::Malformed(_))));
        let update = record(&mut store, 2);
        assert_eq!(update.highscore, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "2");
    }
}
