//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same seed, inputs and frame
//! timestamps it produces the same states:
//! - One integration step per frame, no substepping
//! - Seeded RNG only
//! - No platform dependencies; drawing goes through `renderer::Surface`

pub mod ball;
pub mod glow;
pub mod paddle;
pub mod state;
pub mod tick;
pub mod timer;

pub use ball::Ball;
pub use glow::{GlowEffect, WALL_GLOW};
pub use paddle::{Paddle, PaddleIntent, Side};
pub use state::{GamePhase, GameState, RngState, Score};
pub use tick::{TickInput, tick, toggle_pause, update_timers};
pub use timer::Deferred;
