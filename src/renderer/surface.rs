//! Drawing surface abstraction
//!
//! The game draws through a small set of canvas-like primitives so the same
//! frame code can target the browser canvas or a recording buffer.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An RGBA color (alpha in 0..=1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
    /// Neon border color (CSS `lightblue`)
    pub const LIGHT_BLUE: Rgba = Rgba::opaque(173, 216, 230);
    /// Left team color (CSS `skyblue`)
    pub const SKY_BLUE: Rgba = Rgba::opaque(135, 206, 235);
    /// Right team color (CSS `lightcoral`)
    pub const LIGHT_CORAL: Rgba = Rgba::opaque(240, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same RGB with a different alpha (clamped to 0..=1)
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether anything drawn with this color would be visible
    pub fn is_visible(&self) -> bool {
        self.a > 0.0
    }
}

/// CSS `rgba(...)` form, as accepted by canvas fill/shadow styles
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Canvas-like drawing target
///
/// Fill and shadow styles are sticky: they apply to every primitive drawn
/// after they are set, like a 2D canvas context.
pub trait Surface {
    /// Clear a rectangular region to transparent
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill(&mut self, color: Rgba);
    /// Shadow used for the neon glow; a blur of 0 disables it
    fn set_shadow(&mut self, color: Rgba, blur: f32);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    /// Fill a closed polygon through the given points
    fn fill_polygon(&mut self, points: &[Vec2]);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_format() {
        assert_eq!(Rgba::SKY_BLUE.to_string(), "rgba(135, 206, 235, 1)");
        assert_eq!(
            Rgba::LIGHT_CORAL.with_alpha(0.5).to_string(),
            "rgba(240, 128, 128, 0.5)"
        );
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgba::WHITE.with_alpha(-0.04).a, 0.0);
        assert_eq!(Rgba::WHITE.with_alpha(1.5).a, 1.0);
        assert!(!Rgba::WHITE.with_alpha(-0.04).is_visible());
    }
}
