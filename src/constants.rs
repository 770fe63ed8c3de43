// Screen
pub const SCREEN_WIDTH: f64 = 1000.0;
pub const SCREEN_HEIGHT: f64 = 680.0;

// Frame timing
pub const FRAME_POLL_MS: u64 = 16;
pub const MAX_FRAME_SECONDS: f64 = 0.1;

// Bird physics (pixels, seconds)
pub const BIRD_GRAVITY: f64 = 2500.0;
pub const BIRD_INITIAL_VELOCITY: f64 = 0.0;
pub const BIRD_MAX_VELOCITY: f64 = 2000.0;
pub const BIRD_INITIAL_JUMPING_VELOCITY: f64 = 600.0;

// Bird rotation (degrees, positive = nose up)
pub const BIRD_RISE_ANGLE: f64 = 25.0;
pub const BIRD_FALL_ANGLE: f64 = -60.0;
pub const BIRD_MAX_FALLING_HEIGHT: f64 = -300.0;

// Sprite sizes
pub const BIRD_WIDTH: f64 = 51.0;
pub const BIRD_HEIGHT: f64 = 36.0;
pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_HEIGHT: f64 = 500.0;
pub const GROUND_WIDTH: f64 = 48.0;
pub const BACKGROUND_WIDTH: f64 = 1000.0;

// Ground
pub const GROUND_SPEED: f64 = 200.0;
pub const GROUND_STRIP_HEIGHT: f64 = 100.0;

// Pipes
pub const PIPE_SPACE: f64 = 200.0;
pub const PIPE_SPAWN_X: f64 = SCREEN_WIDTH - 300.0;
pub const PIPE_INITIAL_HEIGHT: f64 = 100.0;
pub const PIPE_WARMUP_SECONDS: f64 = 2.0;

// Background scrolls left at a quarter of the ground's pace
pub const BACKGROUND_SPEED: f64 = -50.0;

// Persistence
pub const DATA_DIR_NAME: &str = ".flappy";
pub const DATA_DIR_ENV: &str = "FLAPPY_HOME";
pub const HIGHSCORE_FILE: &str = "highscore.txt";
pub const PREFERENCES_FILE: &str = "preferences.json";
pub const LOG_FILE: &str = "flappy.log";
pub const LOG_FILTER_ENV: &str = "FLAPPY_LOG";
