//! Recording surface
//!
//! Captures draw calls as plain data. Used by the headless runner and for
//! asserting what a frame actually drew.

use glam::Vec2;
use serde::Serialize;

use super::surface::{Rgba, Surface};

/// A single recorded primitive, with the fill style in effect when drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, fill: Rgba, blur: f32 },
    Circle { center: Vec2, radius: f32, fill: Rgba },
    Polygon { points: Vec<Vec2>, fill: Rgba },
    Text { text: String, x: f32, y: f32, font: String, fill: Rgba },
}

impl DrawCommand {
    /// Fill color of a primitive (None for clears)
    pub fn fill(&self) -> Option<Rgba> {
        match self {
            DrawCommand::Clear { .. } => None,
            DrawCommand::Rect { fill, .. }
            | DrawCommand::Circle { fill, .. }
            | DrawCommand::Polygon { fill, .. }
            | DrawCommand::Text { fill, .. } => Some(*fill),
        }
    }
}

/// Surface that records instead of drawing
#[derive(Debug, Clone)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
    fill: Rgba,
    shadow: Rgba,
    blur: f32,
    font: String,
}

impl Default for CommandList {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            // Canvas defaults: black fill, no shadow
            fill: Rgba::opaque(0, 0, 0),
            shadow: Rgba::TRANSPARENT,
            blur: 0.0,
            font: "10px sans-serif".to_string(),
        }
    }

    /// Drop recorded commands, keeping the current styles
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => Some((*center, *radius, *fill)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count()
    }
}

#[cfg(test)]
impl CommandList {
    /// Current shadow style (color, blur)
    pub fn shadow(&self) -> (Rgba, f32) {
        (self.shadow, self.blur)
    }
}

impl Surface for CommandList {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn set_fill(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn set_shadow(&mut self, color: Rgba, blur: f32) {
        self.shadow = color;
        self.blur = blur;
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            fill: self.fill,
            blur: self.blur,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: self.fill,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2]) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill: self.fill,
        });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font: self.font.clone(),
            fill: self.fill,
        });
    }
}
