//! 2D Rendering Library
//!
//! This crate draws the frame's [`DrawCommand`](hyperview_core::DrawCommand)
//! list with wgpu.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`viewport::Viewport`] - world units on the projection plane to clip space
//! - [`text::LabelText`] - fontdue label layout and glyph atlas
//! - [`tessellate::tessellate`] - lines, circles and labels to triangles
//! - [`pipeline::DrawPipeline`] - alpha-blended triangle pass

pub mod context;
pub mod viewport;
pub mod text;
pub mod tessellate;
pub mod pipeline;

pub use context::{ContextError, RenderContext};
pub use viewport::{Viewport, DEFAULT_HALF_EXTENT};
pub use tessellate::{tessellate, CIRCLE_SEGMENTS};
pub use text::{FontError, LabelFont, LabelText};
pub use pipeline::{DrawPipeline, Vertex2D};

// Re-export core types for convenience
pub use hyperview_core::{DrawCommand, Rgba};
