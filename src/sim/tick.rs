//! Per-frame simulation step and the pause state machine

use super::paddle::PaddleIntent;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: PaddleIntent,
    pub right: PaddleIntent,
}

/// Flip Running <-> Paused. Resuming shows the resume glyph for a while,
/// pausing hides it at once.
pub fn toggle_pause(state: &mut GameState, now_ms: f64) {
    match state.phase {
        GamePhase::Running => {
            state.phase = GamePhase::Paused;
            state.resume_icon.cancel();
            log::info!("Paused at {}-{}", state.score.left, state.score.right);
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Running;
            state.resume_icon.schedule(now_ms, RESUME_ICON_MS);
            log::info!("Resumed");
        }
    }
}

/// Wall-clock timers run regardless of pause
pub fn update_timers(state: &mut GameState, now_ms: f64) {
    state.left.update_timers(now_ms);
    state.right.update_timers(now_ms);
    state.resume_icon.poll(now_ms);
}

/// Advance the simulation by one frame. Paused frames only service timers.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    update_timers(state, now_ms);

    if state.is_paused() {
        return;
    }

    state.time_ticks += 1;

    state.left.apply_intent(input.left);
    state.right.apply_intent(input.right);

    state.left.move_step(BOARD_HEIGHT);
    state.right.move_step(BOARD_HEIGHT);

    if let Some(glow) = state.ball.move_step() {
        state.glows.push(glow);
    }

    if let Some(glow) = state.ball.check_collision(&mut state.left, now_ms) {
        state.glows.push(glow);
    }
    if let Some(glow) = state.ball.check_collision(&mut state.right, now_ms) {
        state.glows.push(glow);
    }

    if let Some(scorer) = state.ball.check_out_of_bounds(&mut state.rng_state) {
        state.score.award(scorer);
        log::debug!(
            "{:?} scores ({}-{})",
            scorer,
            state.score.left,
            state.score.right
        );
    }
}
