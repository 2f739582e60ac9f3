//! Rendering module
//!
//! Everything is drawn through the `Surface` trait: a 2D canvas context in
//! the browser, a `CommandList` in headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;
pub mod hud;
pub mod surface;

pub use commands::{CommandList, DrawCommand};
pub use hud::Overlay;
pub use surface::{Rgba, Surface};
