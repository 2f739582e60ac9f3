//! One-shot deferred actions with cancel-on-retrigger
//!
//! Every `schedule` bumps a generation token. A fire request carrying an older
//! token is ignored, so re-triggering before expiry restarts the delay without
//! needing a host timer-cancellation API. The action can either be fired by a
//! host timer callback (`fire`) or polled once per frame (`poll`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deferred {
    generation: u64,
    /// Wall-clock deadline (ms) of the pending action
    due_ms: Option<f64>,
}

impl Deferred {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the action; returns the token that may fire it
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) -> u64 {
        self.generation += 1;
        self.due_ms = Some(now_ms + delay_ms);
        self.generation
    }

    /// Drop the pending action; any outstanding token becomes stale
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.due_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    /// Fire from a host timer. Returns true if the action should run.
    pub fn fire(&mut self, token: u64) -> bool {
        if token != self.generation || self.due_ms.is_none() {
            return false;
        }
        self.due_ms = None;
        true
    }

    /// Fire if the deadline has passed. Returns true at most once per schedule.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
