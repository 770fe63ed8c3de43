//! Player preferences read from `preferences.json` in the data directory.
//!
//! Only presentation options live here; the physics are fixed. The file is
//! optional and never written by the game.

use crate::audio::{AudioSink, Silent, TerminalBell};
use crate::constants::PREFERENCES_FILE;
use crate::utils::persistence;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Ring the terminal bell on sound cues.
    pub sound: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { sound: true }
    }
}

impl Preferences {
    /// Load from the data directory. Missing or malformed files give the
    /// defaults.
    pub fn load() -> Self {
        match persistence::data_path(PREFERENCES_FILE) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("No data directory for preferences: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        persistence::load_json_or_default(path)
    }

    /// The sound sink these preferences ask for.
    pub fn audio_sink(&self) -> Box<dyn AudioSink> {
        if self.sound {
            Box::new(TerminalBell)
        } else {
            Box::new(Silent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_keeps_sound_on() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_from(&dir.path().join(PREFERENCES_FILE));
        assert!(prefs.sound);
        // Nothing is written back
        assert!(!dir.path().join(PREFERENCES_FILE).exists());
    }

    #[test]
    fn test_sound_can_be_turned_off() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, r#"{ "sound": false }"#).unwrap();

        assert!(!Preferences::load_from(&path).sound);
    }

    #[test]
    fn test_gameplay_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        fs::write(&path, r#"{ "pipe_space": 500.0, "bird_gravity": 0.0 }"#).unwrap();

        assert_eq!(Preferences::load_from(&path), Preferences::default());
    }
}
