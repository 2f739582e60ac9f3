//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives here, owned by one `GameState`.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::glow::GlowEffect;
use super::paddle::{Paddle, Side};
use super::timer::Deferred;

/// Pause state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Paused,
}

/// Per-side score counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// RNG state wrapper for serialization
///
/// Each draw re-derives the PCG stream from the seed and skips the draws
/// already taken, so the state stays plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        rng.advance(self.draws);
        rng
    }

    /// Fair coin
    pub fn coin_flip(&mut self) -> bool {
        let bit = self.to_rng().next_u32() >> 31 == 1;
        self.draws += 1;
        bit
    }
}

/// Complete game state (deterministic given seed and input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: GamePhase,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    /// Active glow effects, in spawn order
    pub glows: Vec<GlowEffect>,
    pub score: Score,
    /// Resume glyph is shown while this is pending
    pub resume_icon: Deferred,
    /// Simulation steps taken (not counting paused frames)
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        let mut rng_state = RngState::new(seed);
        let ball = Ball::new(&mut rng_state);
        Self {
            seed,
            rng_state,
            phase: GamePhase::Running,
            ball,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            glows: Vec::new(),
            score: Score::default(),
            resume_icon: Deferred::new(),
            time_ticks: 0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn show_resume_icon(&self) -> bool {
        self.resume_icon.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_state() {
        let state = GameState::new(5);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.pos, Vec2::new(800.0, 425.0));
        assert!(state.glows.is_empty());
        assert!(!state.show_resume_icon());
        assert_eq!(state.rng_state.draws, 1);
    }

    #[test]
    fn test_rng_is_reproducible() {
        let mut a = RngState::new(1234);
        let mut b = RngState::new(1234);
        let flips_a: Vec<bool> = (0..32).map(|_| a.coin_flip()).collect();
        let flips_b: Vec<bool> = (0..32).map(|_| b.coin_flip()).collect();
        assert_eq!(flips_a, flips_b);
        assert!(flips_a.iter().any(|&f| f));
        assert!(flips_a.iter().any(|&f| !f));
    }

    #[test]
    fn test_award() {
        let mut score = Score::default();
        score.award(Side::Right);
        score.award(Side::Right);
        score.award(Side::Left);
        assert_eq!(score.get(Side::Left), 1);
        assert_eq!(score.get(Side::Right), 2);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(77);
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.ball, state.ball);
        assert_eq!(back.rng_state, state.rng_state);
    }
}
