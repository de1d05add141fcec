//! Backend-neutral drawing primitives
//!
//! Positions and sizes are in world units on the projection plane. The render
//! crate maps them to the surface.

use hyperview_math::Point2;

use crate::color::Rgba;

/// One primitive for the rendering backend
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Straight line with a linear color gradient from `from` to `to`
    Line {
        from: Point2,
        to: Point2,
        color_start: Rgba,
        color_end: Rgba,
        width: f64,
    },
    /// Solid disc
    FilledCircle {
        center: Point2,
        radius: f64,
        color: Rgba,
    },
    /// Text whose baseline starts at `position`
    Text {
        position: Point2,
        text: String,
        color: Rgba,
        size: f64,
    },
}

impl DrawCommand {
    /// Line with one color along its length
    pub fn solid_line(from: Point2, to: Point2, color: Rgba, width: f64) -> Self {
        DrawCommand::Line { from, to, color_start: color, color_end: color, width }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, DrawCommand::FilledCircle { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DrawCommand::Text { .. })
    }
}

/// Sizes used when emitting draw commands
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawStyle {
    /// Stroke width of all lines
    pub line_width: f64,
    /// Radius of the vertex dots
    pub vertex_radius: f64,
    /// Label height
    pub label_size: f64,
    /// Offset of a label from its vertex
    pub label_offset: (f64, f64),
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            line_width: 0.03,
            vertex_radius: 0.05,
            label_size: 0.1,
            label_offset: (0.05, -0.02),
        }
    }
}
