//! Fire-and-forget sound cues.
//!
//! The game only announces which cue to play; the sink decides what that
//! means. In a terminal the closest thing to sound is the bell.

use std::io::{self, Write};

/// Sound cues raised by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The bird flapped.
    Wing,
    /// A pipe pair was passed.
    Point,
    /// The bird hit something.
    Hit,
    /// The bird is going down after a pipe crash.
    Die,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Wing => "wing",
            Cue::Point => "point",
            Cue::Hit => "hit",
            Cue::Die => "die",
        }
    }
}

/// Receiver of sound cues. Implementations must not block the tick.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) {}
}

/// Rings the terminal bell for the cues worth interrupting for.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, cue: Cue) {
        log::debug!("cue: {}", cue.name());
        if matches!(cue, Cue::Point | Cue::Hit) {
            let mut stdout = io::stdout();
            // A missed bell is not worth surfacing
            let _ = stdout.write_all(b"\x07").and_then(|_| stdout.flush());
        }
    }
}

/// Records cues in order.
impl AudioSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}
