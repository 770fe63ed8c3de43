//! Session tuning parameters.
//!
//! `Settings` holds the physics constants that stay fixed for a session plus
//! a `Dynamic` block that every round resets. It is owned by the game and
//! passed by reference into each entity update.

use crate::constants::*;

/// Per-round mutable physics state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dynamic {
    /// Current fall velocity (pixels/s, positive = down).
    pub bird_velocity: f64,
    /// Remaining upward velocity of the current jump (pixels/s).
    pub bird_jumping_velocity: f64,
    /// Jump-height accumulator: displacement since the current jump began.
    /// Goes negative while falling, down to `bird_max_falling_height`.
    pub bird_jumping_height: f64,
    /// Elapsed seconds of the last frame.
    pub time_passed_seconds: f64,
    /// Seconds spent in the ACTIVE state this round.
    pub active_time: f64,
}

/// Static and dynamic game settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub screen_width: f64,
    pub screen_height: f64,

    pub bird_gravity: f64,
    pub bird_initial_velocity: f64,
    pub bird_max_velocity: f64,
    pub bird_initial_jumping_velocity: f64,
    pub bird_rise_angle: f64,
    pub bird_fall_angle: f64,
    pub bird_max_falling_height: f64,
    pub bird_width: f64,
    pub bird_height: f64,

    pub ground_speed: f64,
    pub ground_strip_height: f64,
    pub ground_width: f64,

    pub pipe_speed: f64,
    pub pipe_space: f64,
    /// A new pair spawns once the latest pair's left edge reaches this x.
    pub pipe_spawn_x: f64,
    pub pipe_initial_height: f64,
    pub pipe_width: f64,
    pub pipe_height: f64,
    pub pipe_warmup_seconds: f64,

    pub background_speed: f64,
    pub background_width: f64,

    // Derived by `initialize_static`
    pub ground_height: f64,
    pub max_jump_height: f64,
    pub pipe_min_top: f64,
    pub pipe_max_top: f64,

    pub dynamic: Dynamic,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            bird_gravity: BIRD_GRAVITY,
            bird_initial_velocity: BIRD_INITIAL_VELOCITY,
            bird_max_velocity: BIRD_MAX_VELOCITY,
            bird_initial_jumping_velocity: BIRD_INITIAL_JUMPING_VELOCITY,
            bird_rise_angle: BIRD_RISE_ANGLE,
            bird_fall_angle: BIRD_FALL_ANGLE,
            bird_max_falling_height: BIRD_MAX_FALLING_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,

            ground_speed: GROUND_SPEED,
            ground_strip_height: GROUND_STRIP_HEIGHT,
            ground_width: GROUND_WIDTH,

            // Pipes move with the ground so they look planted in it
            pipe_speed: GROUND_SPEED,
            pipe_space: PIPE_SPACE,
            pipe_spawn_x: PIPE_SPAWN_X,
            pipe_initial_height: PIPE_INITIAL_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_warmup_seconds: PIPE_WARMUP_SECONDS,

            background_speed: BACKGROUND_SPEED,
            background_width: BACKGROUND_WIDTH,

            ground_height: 0.0,
            max_jump_height: 0.0,
            pipe_min_top: 0.0,
            pipe_max_top: 0.0,

            dynamic: Dynamic::default(),
        };
        settings.initialize_static();
        settings.reset_dynamic();
        settings
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the constants derived from the tunable ones.
    ///
    /// `max_jump_height` is the apex reachable from a single impulse,
    /// `v0² / (2g)`. The pipe gap anchor range keeps the gap clear of the
    /// screen top and of the ground strip.
    pub fn initialize_static(&mut self) {
        self.ground_height = self.screen_height - self.ground_strip_height;
        self.max_jump_height =
            self.bird_initial_jumping_velocity * self.bird_initial_jumping_velocity
                / (2.0 * self.bird_gravity);
        self.pipe_min_top = self.pipe_initial_height;
        self.pipe_max_top = self.ground_height - self.pipe_initial_height - self.pipe_space;
    }

    /// Reset the per-round physics state.
    pub fn reset_dynamic(&mut self) {
        self.dynamic = Dynamic {
            bird_velocity: self.bird_initial_velocity,
            bird_jumping_velocity: self.bird_initial_jumping_velocity,
            bird_jumping_height: 0.0,
            time_passed_seconds: 0.0,
            active_time: 0.0,
        };
    }

    /// Whether the values can drive the simulation: positive rates and
    /// sizes, a non-empty gap anchor range, and pipes long enough to close
    /// the screen above and below the gap at either end of that range.
    /// Reads only the tunable fields, so it holds before `initialize_static`.
    pub fn is_playable(&self) -> bool {
        let ground_height = self.screen_height - self.ground_strip_height;
        let max_top = ground_height - self.pipe_initial_height - self.pipe_space;

        self.bird_gravity > 0.0
            && self.bird_initial_jumping_velocity > 0.0
            && self.bird_max_falling_height < 0.0
            && self.bird_width > 0.0
            && self.bird_height > 0.0
            && self.ground_width > 0.0
            && self.ground_speed > 0.0
            && self.pipe_speed > 0.0
            && self.pipe_width > 0.0
            && self.background_width > 0.0
            && self.ground_strip_height > 0.0
            && self.ground_strip_height < self.screen_height
            && self.pipe_initial_height >= 0.0
            && self.pipe_space > 0.0
            && max_top >= self.pipe_initial_height
            // Lowest gap: the down pipe still reaches y = 0
            && self.pipe_height >= max_top
            // Highest gap: the up pipe still reaches the ground line
            && self.pipe_initial_height + self.pipe_space + self.pipe_height >= ground_height
    }

    /// Bird's start position: horizontally at a quarter of the screen,
    /// vertically centred. Returns the top-left corner.
    pub fn bird_start(&self) -> (f64, f64) {
        let center_x = ((self.screen_width / 2.0).floor() / 2.0).floor();
        let center_y = (self.screen_height / 2.0).floor();
        (
            center_x - (self.bird_width / 2.0).floor(),
            center_y - (self.bird_height / 2.0).floor(),
        )
    }
}
