//! Core types for the Hyperview tesseract viewer
//!
//! This crate turns rotation state into backend-neutral draw commands:
//!
//! - [`TesseractModel`] - the 16 vertices, 32 edges and 4 axis markers
//! - [`RotationState`] - per-plane angle accumulators and rates
//! - [`DisplayFlags`] - label and axis overlay toggles
//! - [`DepthRange`] - normalization of projected w into a color cue
//! - [`DrawCommand`] - line, filled circle and text primitives
//! - [`FrameOrchestrator`] - the per-frame pipeline producing a [`Frame`]

mod model;
mod rotation_state;
mod display;
pub mod color;
mod draw;
mod frame;

pub use model::{
    Edge, TesseractModel, AXIS_EDGE_COUNT, AXIS_MARKER_COUNT, AXIS_MARKER_LENGTH,
    CUBE_EDGE_COUNT, CUBE_VERTEX_COUNT, POINT_COUNT,
};
pub use model::{axis_edges, axis_markers, cube_edges, cube_vertices};
pub use rotation_state::{RotationRate, RotationState, DEFAULT_ANGLE_STEP};
pub use display::{DisplayFlags, SceneState};
pub use color::{DepthRange, Rgba};
pub use draw::{DrawCommand, DrawStyle};
pub use frame::{vertex_label, Frame, FrameOrchestrator, ProjectedModel};

// Re-export commonly used types from hyperview_math for convenience
pub use hyperview_math::{
    MatrixError, PerspectiveParams, PlaneAngles, Point2, Point4, RotationOrder, RotationPlane,
};
