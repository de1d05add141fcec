//! Rendering pipeline components
//!
//! A single alpha-blended triangle pass draws every primitive of a frame,
//! label glyphs included.

pub mod types;
pub mod draw_pipeline;

pub use types::{Vertex2D, SOLID_UV};
pub use draw_pipeline::{DrawPipeline, MIN_VERTEX_CAPACITY};
