//! Flappy - a Flappy Bird clone for the terminal.
//!
//! The game core (`game`) is independent of the terminal: it advances by
//! explicit time deltas and reports sounds and highscores through the
//! `audio` and `highscore` traits, which keeps it testable headless.

pub mod audio;
pub mod clock;
pub mod constants;
pub mod game;
pub mod highscore;
pub mod input;
pub mod preferences;
pub mod settings;
pub mod ui;
pub mod utils;
