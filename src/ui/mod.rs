//! Terminal rendering.

pub mod common;
pub mod flappy_scene;

use crate::game::FlappyGame;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, game: &FlappyGame) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, &game.scene());
}
