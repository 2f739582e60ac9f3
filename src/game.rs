//! Frame orchestration
//!
//! `GameLoop` owns the state and input, and runs the full per-frame sequence:
//! clear, simulate (unless paused), draw entities and HUD, advance/draw/prune
//! glow effects, draw the pause overlay. Rescheduling the next frame is the
//! host's job.

use crate::consts::*;
use crate::input::{Action, Controls, KeyBindings};
use crate::renderer::hud::{self, Overlay};
use crate::renderer::Surface;
use crate::settings::Settings;
use crate::sim::{GameState, tick, toggle_pause};

pub struct GameLoop {
    state: GameState,
    controls: Controls,
    bindings: KeyBindings,
}

impl GameLoop {
    pub fn new(seed: u64, settings: &Settings) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed),
            controls: Controls::default(),
            bindings: settings.bindings.clone(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether a key code maps to any action
    pub fn is_bound(&self, code: &str) -> bool {
        self.bindings.action_for(code).is_some()
    }

    /// Key pressed (or auto-repeated). Unbound codes are ignored.
    pub fn key_down(&mut self, code: &str, now_ms: f64) {
        let Some(action) = self.bindings.action_for(code) else {
            return;
        };
        if self.controls.press(action) && action == Action::Pause {
            toggle_pause(&mut self.state, now_ms);
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(action) = self.bindings.action_for(code) {
            self.controls.release(action);
        }
    }

    /// Release all held keys; the host calls this when focus is lost
    pub fn release_all(&mut self) {
        self.controls.clear();
    }

    /// Which glyph the overlay shows right now
    pub fn overlay(&self) -> Overlay {
        if self.state.is_paused() {
            Overlay::Paused
        } else if self.state.show_resume_icon() {
            Overlay::Resumed
        } else {
            Overlay::None
        }
    }

    /// Run one complete frame
    pub fn frame(&mut self, surface: &mut dyn Surface, now_ms: f64) {
        surface.clear_rect(0.0, 0.0, BOARD_WIDTH, BOARD_HEIGHT);

        let input = self.controls.to_tick_input();
        tick(&mut self.state, &input, now_ms);

        self.state.left.draw(surface);
        self.state.right.draw(surface);
        self.state.ball.draw(surface);
        hud::draw_borders(surface);
        hud::draw_midline(surface);
        hud::draw_score(surface, &self.state.score);

        // Draw everything first, then prune; order of survivors is kept
        for glow in &mut self.state.glows {
            glow.update();
            glow.draw(surface);
        }
        self.state.glows.retain(|g| !g.is_done());
        log::trace!("{} glow effects active", self.state.glows.len());

        hud::draw_overlay(surface, self.overlay());
    }
}
