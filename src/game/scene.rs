//! Read-only snapshot of what should be on screen.

use super::logic::FlappyGame;
use super::state::GameStatus;
use super::types::Rect;

/// Text panel drawn over the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// "Get ready" prompt.
    Ready,
    /// Running score.
    Active { score: u32 },
    /// Game-over panel.
    Over {
        score: u32,
        highscore: u32,
        new_record: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSprite {
    pub rect: Rect,
    pub is_up: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSprite {
    pub rect: Rect,
    pub rotation: f64,
}

/// Everything a renderer needs for one frame, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// y of the ground line.
    pub ground_line: f64,
    /// Left edges of the two background copies.
    pub background: [f64; 2],
    pub background_width: f64,
    pub grounds: Vec<Rect>,
    pub pipes: Vec<PipeSprite>,
    pub bird: BirdSprite,
    pub overlay: Overlay,
}

impl FlappyGame {
    pub fn scene(&self) -> Scene {
        let overlay = match self.stats.status {
            GameStatus::Ready => Overlay::Ready,
            GameStatus::Active => Overlay::Active {
                score: self.stats.score,
            },
            GameStatus::Over => Overlay::Over {
                score: self.stats.score,
                highscore: self.highscore,
                new_record: self.new_record,
            },
        };

        Scene {
            width: self.settings.screen_width,
            height: self.settings.screen_height,
            ground_line: self.settings.ground_height,
            background: [self.background.x, self.background.x2],
            background_width: self.background.width,
            grounds: self.grounds.iter().map(|g| g.rect()).collect(),
            pipes: self
                .pipes
                .iter()
                .map(|p| PipeSprite {
                    rect: p.rect(),
                    is_up: p.is_up(),
                })
                .collect(),
            bird: BirdSprite {
                rect: self.bird.rect(),
                rotation: self.bird.rotation_angle,
            },
            overlay,
        }
    }
}
