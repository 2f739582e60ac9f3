//! Expanding, fading circle marking a bounce or paddle contact

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::{Rgba, Surface};

/// Glow color for wall bounces
pub const WALL_GLOW: [u8; 3] = [173, 216, 230];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlowEffect {
    /// Fixed at creation
    pub pos: Vec2,
    pub radius: f32,
    /// 1.0 when spawned, decays each frame; may dip slightly below 0
    pub opacity: f32,
    pub rgb: [u8; 3],
}

impl GlowEffect {
    pub fn new(pos: Vec2, rgb: [u8; 3]) -> Self {
        Self {
            pos,
            radius: GLOW_START_RADIUS,
            opacity: 1.0,
            rgb,
        }
    }

    /// Advance one frame: grow toward the cap, fade toward zero
    pub fn update(&mut self) {
        if self.radius < GLOW_MAX_RADIUS {
            self.radius = (self.radius + GLOW_GROWTH).min(GLOW_MAX_RADIUS);
        }
        if self.opacity > 0.0 {
            self.opacity -= GLOW_FADE;
        }
    }

    /// Opacity as a render alpha
    pub fn alpha(&self) -> f32 {
        self.opacity.clamp(0.0, 1.0)
    }

    pub fn is_done(&self) -> bool {
        self.opacity <= 0.0
    }

    pub fn color(&self) -> Rgba {
        let [r, g, b] = self.rgb;
        Rgba::opaque(r, g, b).with_alpha(self.alpha())
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.is_done() {
            return;
        }
        surface.set_fill(self.color());
        surface.fill_circle(self.pos, self.radius);
    }
}
