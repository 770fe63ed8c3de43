//! Flappy Bird game core.
//!
//! A real-time game where the player flaps a bird through gaps between
//! scrolling pipes. Gravity pulls the bird down every frame; touching a
//! pipe or the ground ends the round.

pub mod arena;
pub mod bird;
pub mod collision;
pub mod logic;
pub mod scene;
pub mod scenery;
pub mod spawner;
pub mod state;
pub mod types;

pub use arena::Arena;
pub use logic::*;
pub use scene::*;
pub use state::*;
pub use types::*;
