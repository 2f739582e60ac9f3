//! Static board decoration and HUD
//!
//! Borders, center line, score text and the pause/resume glyph. None of these
//! depend on frame timing; they are redrawn every frame after a clear.

use glam::Vec2;

use super::surface::{Rgba, Surface};
use crate::consts::*;
use crate::sim::{Score, Side};

/// Which glyph to draw over the board center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Two vertical bars
    Paused,
    /// Right-pointing triangle, shown briefly after resuming
    Resumed,
}

/// Top and bottom bars with the neon shadow
pub fn draw_borders(surface: &mut dyn Surface) {
    surface.set_fill(Rgba::LIGHT_BLUE);
    surface.set_shadow(Rgba::LIGHT_BLUE, GLOW_BLUR);
    surface.fill_rect(0.0, 0.0, BOARD_WIDTH, BORDER_THICKNESS);
    surface.fill_rect(
        0.0,
        BOARD_HEIGHT - BORDER_THICKNESS,
        BOARD_WIDTH,
        BORDER_THICKNESS,
    );
    surface.set_shadow(Rgba::LIGHT_BLUE, 0.0);
}

/// Dashed center line: small square ticks down the board
pub fn draw_midline(surface: &mut dyn Surface) {
    surface.set_fill(Rgba::WHITE);
    let x = BOARD_WIDTH / 2.0 - 2.0;
    let mut y = MIDLINE_START;
    while y < BOARD_HEIGHT {
        surface.fill_rect(x, y, MIDLINE_TICK, MIDLINE_TICK);
        y += MIDLINE_SPACING;
    }
}

pub fn draw_score(surface: &mut dyn Surface, score: &Score) {
    surface.set_fill(Rgba::WHITE);
    surface.set_font(SCORE_FONT);
    surface.fill_text(&score.get(Side::Left).to_string(), BOARD_WIDTH / 5.0, SCORE_Y);
    surface.fill_text(
        &score.get(Side::Right).to_string(),
        BOARD_WIDTH * 4.0 / 5.0 - SCORE_Y,
        SCORE_Y,
    );
}

pub fn draw_overlay(surface: &mut dyn Surface, overlay: Overlay) {
    let cx = BOARD_WIDTH / 2.0;
    let cy = BOARD_HEIGHT / 2.0;

    surface.set_fill(Rgba::WHITE);
    match overlay {
        Overlay::None => {}
        Overlay::Paused => {
            surface.fill_rect(cx - 15.0, cy - 25.0, 10.0, 50.0);
            surface.fill_rect(cx + 5.0, cy - 25.0, 10.0, 50.0);
        }
        Overlay::Resumed => {
            surface.fill_polygon(&[
                Vec2::new(cx - 15.0, cy - 25.0),
                Vec2::new(cx + 25.0, cy),
                Vec2::new(cx - 15.0, cy + 25.0),
            ]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandList, DrawCommand};

    #[test]
    fn test_midline_spans_board() {
        let mut list = CommandList::new();
        draw_midline(&mut list);

        // Ticks at y = 10, 35, ..., 835
        assert_eq!(list.commands.len(), 34);
        match list.commands.last() {
            Some(DrawCommand::Rect { y, .. }) => assert_eq!(*y, 835.0),
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn test_borders_reset_shadow() {
        let mut list = CommandList::new();
        draw_borders(&mut list);

        assert_eq!(list.commands.len(), 2);
        assert_eq!(list.shadow().1, 0.0);
        match &list.commands[1] {
            DrawCommand::Rect { y, blur, .. } => {
                assert_eq!(*y, BOARD_HEIGHT - BORDER_THICKNESS);
                assert_eq!(*blur, GLOW_BLUR);
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn test_score_text() {
        let mut list = CommandList::new();
        draw_score(&mut list, &Score { left: 3, right: 11 });
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["3", "11"]);
    }

    #[test]
    fn test_overlay_glyphs() {
        let mut list = CommandList::new();
        draw_overlay(&mut list, Overlay::None);
        assert!(list.commands.is_empty());

        draw_overlay(&mut list, Overlay::Paused);
        assert_eq!(list.commands.len(), 2);
        assert_eq!(list.polygon_count(), 0);

        list.clear_commands();
        draw_overlay(&mut list, Overlay::Resumed);
        assert_eq!(list.polygon_count(), 1);
    }
}
