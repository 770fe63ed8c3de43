//! File helpers for the ~/.flappy/ data directory.
//!
//! The highscore, the optional preferences file and the log file all live
//! here. `FLAPPY_HOME` relocates the directory.

use crate::constants::{DATA_DIR_ENV, DATA_DIR_NAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the data directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(custom) => PathBuf::from(custom),
        None => {
            let home_dir = dirs::home_dir().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Could not determine home directory",
                )
            })?;
            home_dir.join(DATA_DIR_NAME)
        }
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in the data directory.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if it is missing or invalid.
///
/// A missing file is normal and stays quiet; unreadable or unparsable
/// content is logged.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Invalid JSON in {}: {}", path.display(), e);
            T::default()
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => T::default(),
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let val: Vec<String> = load_json_or_default(&dir.path().join("nope.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_partial_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, r#"{ "count": 3 }"#).unwrap();

        let loaded: Sample = load_json_or_default(&path);
        assert_eq!(loaded.count, 3);
        assert!(loaded.name.is_empty());
    }

    #[test]
    fn test_load_invalid_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded: Sample = load_json_or_default(&path);
        assert_eq!(loaded, Sample::default());
    }
}
