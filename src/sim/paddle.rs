//! Player paddles

use serde::{Deserialize, Serialize};

use super::timer::Deferred;
use crate::consts::*;
use crate::renderer::{Rgba, Surface};

/// Board side a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Team identity color
    pub fn color(self) -> Rgba {
        match self {
            Side::Left => Rgba::SKY_BLUE,
            Side::Right => Rgba::LIGHT_CORAL,
        }
    }

    /// Glow color for ball contact with this side's paddle
    pub fn contact_glow(self) -> [u8; 3] {
        let c = self.color();
        [c.r, c.g, c.b]
    }

    /// X of the paddle's left edge
    pub fn paddle_x(self) -> f32 {
        match self {
            Side::Left => PADDLE_INSET,
            Side::Right => BOARD_WIDTH - PADDLE_WIDTH - PADDLE_INSET,
        }
    }
}

/// Held input for one paddle this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleIntent {
    Up,
    Down,
    #[default]
    Idle,
}

impl PaddleIntent {
    /// Up wins when both directions are held
    pub fn from_held(up: bool, down: bool) -> Self {
        if up {
            PaddleIntent::Up
        } else if down {
            PaddleIntent::Down
        } else {
            PaddleIntent::Idle
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_y: f32,
    /// Current display color
    pub color: Rgba,
    pub original_color: Rgba,
    pub flash_color: Rgba,
    /// Pending revert of `color` back to `original_color`
    pub flash_revert: Deferred,
}

impl Paddle {
    /// Paddle at its side's inset, vertically centered
    pub fn new(side: Side) -> Self {
        let color = side.color();
        Self {
            side,
            x: side.paddle_x(),
            y: BOARD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            velocity_y: 0.0,
            color,
            original_color: color,
            flash_color: color,
            flash_revert: Deferred::new(),
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Accelerate toward max speed while a direction is held, damp otherwise
    pub fn apply_intent(&mut self, intent: PaddleIntent) {
        match intent {
            PaddleIntent::Up => {
                self.velocity_y = (self.velocity_y - PADDLE_ACCELERATION).max(-PADDLE_MAX_SPEED);
            }
            PaddleIntent::Down => {
                self.velocity_y = (self.velocity_y + PADDLE_ACCELERATION).min(PADDLE_MAX_SPEED);
            }
            PaddleIntent::Idle => self.velocity_y *= PADDLE_DAMPING,
        }
    }

    /// Integrate one frame and clamp to the board. Velocity survives the
    /// clamp, so holding into a wall keeps the paddle pinned there.
    pub fn move_step(&mut self, board_height: f32) {
        self.y += self.velocity_y;
        self.y = self.y.clamp(0.0, board_height - self.height);
    }

    /// Switch to the flash color; revert after the flash duration counted
    /// from the most recent contact
    pub fn flash(&mut self, now_ms: f64) {
        self.color = self.flash_color;
        self.flash_revert.schedule(now_ms, FLASH_DURATION_MS);
    }

    /// Run the pending color revert if due
    pub fn update_timers(&mut self, now_ms: f64) {
        if self.flash_revert.poll(now_ms) {
            self.color = self.original_color;
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill(self.color);
        surface.set_shadow(self.color, GLOW_BLUR);
        surface.fill_rect(self.x, self.y, self.width, self.height);
        surface.set_shadow(self.color, 0.0);
    }
}
