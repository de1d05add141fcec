//! Conversion of draw commands into triangles
//!
//! Geometry is built in plane units and mapped to clip space vertex by
//! vertex. The viewport scales both axes by the same factor, so widths and
//! radii keep their shape on screen. Text becomes one textured quad per
//! glyph, laid out by [`LabelText`].

use std::f64::consts::TAU;

use hyperview_core::{DrawCommand, Rgba};
use hyperview_math::Point2;

use crate::pipeline::Vertex2D;
use crate::text::{GlyphQuad, LabelText};
use crate::viewport::Viewport;

/// Triangles per filled circle
pub const CIRCLE_SEGMENTS: usize = 24;

/// Triangle list for all commands, in command order
pub fn tessellate(
    commands: &[DrawCommand],
    viewport: &Viewport,
    labels: &mut LabelText,
) -> Vec<Vertex2D> {
    let mut out = Vec::new();

    for command in commands {
        match command {
            DrawCommand::Line { from, to, color_start, color_end, width } => {
                line(&mut out, viewport, *from, *to, *color_start, *color_end, *width);
            }
            DrawCommand::FilledCircle { center, radius, color } => {
                circle(&mut out, viewport, *center, *radius, *color);
            }
            DrawCommand::Text { position, text, color, size } => {
                for quad in labels.layout(text, *position, *size, viewport) {
                    glyph(&mut out, viewport, &quad, *color);
                }
            }
        }
    }

    out
}

/// Quad along `from → to`; each end takes its own color
fn line(
    out: &mut Vec<Vertex2D>,
    viewport: &Viewport,
    from: Point2,
    to: Point2,
    color_start: Rgba,
    color_end: Rgba,
    width: f64,
) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || !len.is_finite() || width <= 0.0 {
        return;
    }

    let half = width / 2.0;
    let (nx, ny) = (-dy / len * half, dx / len * half);

    let a0 = viewport.to_clip(from.offset(nx, ny));
    let a1 = viewport.to_clip(from.offset(-nx, -ny));
    let b0 = viewport.to_clip(to.offset(nx, ny));
    let b1 = viewport.to_clip(to.offset(-nx, -ny));

    out.extend_from_slice(&[
        Vertex2D::new(a0, color_start),
        Vertex2D::new(a1, color_start),
        Vertex2D::new(b0, color_end),
        Vertex2D::new(b0, color_end),
        Vertex2D::new(a1, color_start),
        Vertex2D::new(b1, color_end),
    ]);
}

/// Fan of [`CIRCLE_SEGMENTS`] triangles around `center`
fn circle(out: &mut Vec<Vertex2D>, viewport: &Viewport, center: Point2, radius: f64, color: Rgba) {
    if radius <= 0.0 || !radius.is_finite() {
        return;
    }

    let c = Vertex2D::new(viewport.to_clip(center), color);
    let rim = |i: usize| {
        let t = TAU * i as f64 / CIRCLE_SEGMENTS as f64;
        Vertex2D::new(
            viewport.to_clip(center.offset(radius * t.cos(), radius * t.sin())),
            color,
        )
    };

    for i in 0..CIRCLE_SEGMENTS {
        out.extend_from_slice(&[c, rim(i), rim(i + 1)]);
    }
}

/// Textured quad covering one glyph
fn glyph(out: &mut Vec<Vertex2D>, viewport: &Viewport, quad: &GlyphQuad, color: Rgba) {
    let [u0, v0] = quad.uv.uv_min;
    let [u1, v1] = quad.uv.uv_max;
    let tl = viewport.to_clip(quad.min);
    let br = viewport.to_clip(quad.max);
    let tr = [br[0], tl[1]];
    let bl = [tl[0], br[1]];

    out.extend_from_slice(&[
        Vertex2D::textured(tl, color, [u0, v0]),
        Vertex2D::textured(bl, color, [u0, v1]),
        Vertex2D::textured(tr, color, [u1, v0]),
        Vertex2D::textured(tr, color, [u1, v0]),
        Vertex2D::textured(bl, color, [u0, v1]),
        Vertex2D::textured(br, color, [u1, v1]),
    ]);
}
