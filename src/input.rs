//! Keyboard input handling
//!
//! Raw key codes are translated to gameplay actions at the boundary; the
//! simulation only ever sees named flags.

use serde::{Deserialize, Serialize};

use crate::sim::{PaddleIntent, TickInput};

/// Gameplay actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Pause,
}

/// Key code (`KeyboardEvent.code`) for each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
    pub pause: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "KeyW".to_string(),
            left_down: "KeyS".to_string(),
            right_up: "ArrowUp".to_string(),
            right_down: "ArrowDown".to_string(),
            pause: "Space".to_string(),
        }
    }
}

impl KeyBindings {
    pub fn action_for(&self, code: &str) -> Option<Action> {
        if code == self.left_up {
            Some(Action::LeftUp)
        } else if code == self.left_down {
            Some(Action::LeftDown)
        } else if code == self.right_up {
            Some(Action::RightUp)
        } else if code == self.right_down {
            Some(Action::RightDown)
        } else if code == self.pause {
            Some(Action::Pause)
        } else {
            None
        }
    }
}

/// Held state of every action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub pause: bool,
}

impl Controls {
    fn flag(&mut self, action: Action) -> &mut bool {
        match action {
            Action::LeftUp => &mut self.left_up,
            Action::LeftDown => &mut self.left_down,
            Action::RightUp => &mut self.right_up,
            Action::RightDown => &mut self.right_down,
            Action::Pause => &mut self.pause,
        }
    }

    /// Mark held. Returns true only on a released -> held edge, so key
    /// auto-repeat does not count as a new press.
    pub fn press(&mut self, action: Action) -> bool {
        let flag = self.flag(action);
        let edge = !*flag;
        *flag = true;
        edge
    }

    pub fn release(&mut self, action: Action) {
        *self.flag(action) = false;
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            left: PaddleIntent::from_held(self.left_up, self.left_down),
            right: PaddleIntent::from_held(self.right_up, self.right_down),
        }
    }
}
