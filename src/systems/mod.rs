//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod pacing;
mod render;
mod window;

pub use pacing::{FramePacer, FrameTick};
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
