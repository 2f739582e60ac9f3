//! `Surface` backed by a browser 2D canvas context

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::surface::{Rgba, Surface};

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        CanvasRenderingContext2d::clear_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn set_fill(&mut self, color: Rgba) {
        self.set_fill_style_str(&color.to_string());
    }

    fn set_shadow(&mut self, color: Rgba, blur: f32) {
        self.set_shadow_color(&color.to_string());
        self.set_shadow_blur(blur as f64);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.begin_path();
        // arc only fails for a negative radius
        if self
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_ok()
        {
            self.fill();
        }
        self.close_path();
    }

    fn fill_polygon(&mut self, points: &[Vec2]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.begin_path();
        self.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.line_to(p.x as f64, p.y as f64);
        }
        self.close_path();
        self.fill();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        if let Err(e) = CanvasRenderingContext2d::fill_text(self, text, x as f64, y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
