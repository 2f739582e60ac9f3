//! Glow Pong - a two-player neon Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, glow effects, scoring)
//! - `renderer`: Drawing surface abstraction and HUD drawing
//! - `input`: Key code translation and edge-triggered controls
//! - `game`: Per-frame orchestration (update, draw, prune, overlay)
//! - `platform`: Browser canvas bootstrap
//! - `settings`: Runtime key bindings and logging preferences

pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::GameLoop;
pub use settings::Settings;

/// Game configuration constants
///
/// All speeds are in board units per frame; the simulation advances one
/// step per scheduled frame with no substepping.
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: f32 = 1600.0;
    pub const BOARD_HEIGHT: f32 = 850.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    /// Gap between a paddle and its side edge
    pub const PADDLE_INSET: f32 = 10.0;
    pub const PADDLE_MAX_SPEED: f32 = 6.0;
    pub const PADDLE_ACCELERATION: f32 = 0.2;
    /// Velocity multiplier applied each frame with no input held
    pub const PADDLE_DAMPING: f32 = 0.9;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.5;
    pub const BALL_BASE_SPEED: f32 = 2.0;
    /// Horizontal speed multiplier on every paddle hit
    pub const PADDLE_BOOST: f32 = 1.1;

    /// Glow effect animation
    pub const GLOW_START_RADIUS: f32 = 20.0;
    pub const GLOW_MAX_RADIUS: f32 = 60.0;
    pub const GLOW_GROWTH: f32 = 2.0;
    pub const GLOW_FADE: f32 = 0.05;

    /// Wall-clock timers (milliseconds)
    pub const FLASH_DURATION_MS: f64 = 100.0;
    pub const RESUME_ICON_MS: f64 = 1000.0;

    /// HUD layout
    pub const BORDER_THICKNESS: f32 = 10.0;
    pub const GLOW_BLUR: f32 = 20.0;
    pub const MIDLINE_START: f32 = 10.0;
    pub const MIDLINE_SPACING: f32 = 25.0;
    pub const MIDLINE_TICK: f32 = 5.0;
    pub const SCORE_FONT: &str = "45px sans-serif";
    pub const SCORE_Y: f32 = 45.0;
}
