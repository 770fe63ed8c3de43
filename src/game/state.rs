//! Round state machine.
//!
//! READY → ACTIVE → OVER → READY. `GameStatus::transition` is the only place
//! that decides what a trigger does in a given state; the game applies the
//! side effects of the returned `Next`.

/// Round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    /// Scenery scrolls, the bird hovers, waiting for the first jump.
    #[default]
    Ready,
    /// Full physics, spawner and collision run.
    Active,
    /// The bird settles; score and highscore are shown.
    Over,
}

/// Things that can drive a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Jump / confirm key.
    Jump,
    /// Bird hit a pipe or the ground.
    Collision,
    /// Quit key or close signal.
    Quit,
}

/// Result of feeding a trigger to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Trigger has no effect in this state.
    Ignore,
    /// Stay in ACTIVE and flap.
    Flap,
    /// Move to another status.
    Enter(GameStatus),
    /// Terminate the process.
    Exit,
}

impl GameStatus {
    /// Decide what `trigger` does in this status.
    pub fn transition(self, trigger: Trigger) -> Next {
        match (self, trigger) {
            (_, Trigger::Quit) => Next::Exit,

            (GameStatus::Ready, Trigger::Jump) => Next::Enter(GameStatus::Active),

            (GameStatus::Active, Trigger::Jump) => Next::Flap,
            (GameStatus::Active, Trigger::Collision) => Next::Enter(GameStatus::Over),

            (GameStatus::Over, Trigger::Jump) => Next::Enter(GameStatus::Ready),

            _ => Next::Ignore,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameStatus::Ready => "ready",
            GameStatus::Active => "active",
            GameStatus::Over => "over",
        }
    }
}
