//! Flappy Bird data structures.
//!
//! All positions are in screen pixels with y growing downward.

use super::state::GameStatus;
use crate::settings::Settings;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The player's bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Left edge (fixed for the whole session).
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// JUMPING when true, FALLING otherwise.
    pub is_jumping: bool,
    /// Current rotation in degrees (positive = nose up).
    pub rotation_angle: f64,
    /// Reference angle captured when the current jump or fall began.
    pub previous_rotation_angle: f64,
}

impl Bird {
    /// Create the bird at its start position.
    pub fn new(settings: &Settings) -> Self {
        let (x, y) = settings.bird_start();
        Self {
            x,
            y,
            width: settings.bird_width,
            height: settings.bird_height,
            is_jumping: false,
            rotation_angle: 0.0,
            previous_rotation_angle: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Orientation of a pipe, with the fields only one side needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeKind {
    /// Hangs from the top; its bottom edge is the gap anchor.
    Down,
    /// Rises from the ground; carries the pair's score flag.
    Up { scored: bool },
}

/// One member of a pipe pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    /// Top edge (fixed for the pipe's lifetime).
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub kind: PipeKind,
    /// Member of the most recently spawned pair.
    pub latest: bool,
}

impl Pipe {
    /// Downward pipe whose bottom edge sits at `gap_top`.
    pub fn down(x: f64, gap_top: f64, settings: &Settings) -> Self {
        Self {
            x,
            y: gap_top - settings.pipe_height,
            width: settings.pipe_width,
            height: settings.pipe_height,
            kind: PipeKind::Down,
            latest: true,
        }
    }

    /// Upward pipe whose top edge sits at `gap_bottom`.
    pub fn up(x: f64, gap_bottom: f64, settings: &Settings) -> Self {
        Self {
            x,
            y: gap_bottom,
            width: settings.pipe_width,
            height: settings.pipe_height,
            kind: PipeKind::Up { scored: false },
            latest: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_up(&self) -> bool {
        matches!(self.kind, PipeKind::Up { .. })
    }
}

/// A single ground tile.
#[derive(Debug, Clone, PartialEq)]
pub struct Ground {
    /// Left edge.
    pub x: f64,
    /// Top edge (the ground line).
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Ground {
    pub fn new(x: f64, settings: &Settings) -> Self {
        Self {
            x,
            y: settings.ground_height,
            width: settings.ground_width,
            height: settings.ground_strip_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Two copies of the background tiled horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Background {
    pub x: f64,
    pub x2: f64,
    pub width: f64,
}

impl Background {
    pub fn new(settings: &Settings) -> Self {
        Self {
            x: 0.0,
            x2: settings.background_width,
            width: settings.background_width,
        }
    }
}

/// Round statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStats {
    pub score: u32,
    pub status: GameStatus,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_stats(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_pipe_pair_leaves_gap() {
        let settings = Settings::new();
        let down = Pipe::down(1000.0, 150.0, &settings);
        let up = Pipe::up(1000.0, 150.0 + settings.pipe_space, &settings);

        assert_eq!(down.rect().bottom(), 150.0);
        assert_eq!(up.rect().top(), 350.0);
        assert!(!down.rect().intersects(&up.rect()));
        assert!(up.is_up());
        assert!(!down.is_up());
    }

    #[test]
    fn test_new_stats_are_ready_with_zero_score() {
        let stats = GameStats::new();
        assert_eq!(stats.score, 0);
        assert_eq!(stats.status, GameStatus::Ready);
    }
}
