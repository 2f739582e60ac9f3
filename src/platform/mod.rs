//! Platform abstraction layer
//!
//! Browser bootstrap: canvas lookup and sizing, keyboard listeners, and the
//! self-rescheduling animation frame loop. A missing window, canvas or 2D
//! context is fatal and reported as a `SetupError`.

use std::fmt;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Id of the canvas element the game draws into
pub const CANVAS_ID: &str = "board";

/// Host collaborators missing at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    NoWindow,
    NoDocument,
    /// No element with this id, or it isn't a canvas
    NoCanvas(String),
    /// The canvas refused a 2D context
    NoContext,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "no global window"),
            SetupError::NoDocument => write!(f, "window has no document"),
            SetupError::NoCanvas(id) => write!(f, "no canvas element with id '{}'", id),
            SetupError::NoContext => write!(f, "canvas has no 2d rendering context"),
        }
    }
}

impl std::error::Error for SetupError {}
