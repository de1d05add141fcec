//! Depth cue colors
//!
//! The fourth dimension is conveyed by tinting: cube vertices are normalized
//! against the frame's range of projected w and drawn from red (far) to white
//! (near). The range is taken over the 16 cube vertices only.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// Normalized depth used when every vertex has the same projected w
pub const NEUTRAL_DEPTH: f64 = 0.5;

/// RGBA color
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Axis colors, in x, y, z, w order
pub const AXIS_COLORS: [Rgba; 4] = [
    Rgba::new(1.0, 0.3, 0.3, 1.0), // salmon
    Rgba::new(0.0, 0.7, 0.0, 1.0), // green
    Rgba::new(0.0, 0.0, 1.0, 1.0), // blue
    Rgba::new(0.9, 0.0, 0.8, 1.0), // magenta
];

/// Vertex label color
pub const LABEL_COLOR: Rgba = Rgba::new(0.8, 0.8, 0.8, 1.0);

/// Alpha of the vertex dots
const VERTEX_ALPHA: f32 = 0.8;

/// Min/max of projected w over one frame's cube vertices
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthRange {
    pub min: f64,
    pub max: f64,
}

impl DepthRange {
    /// Range of the given depths. `None` for an empty slice.
    pub fn from_depths(depths: &[f64]) -> Option<Self> {
        let (&first, rest) = depths.split_first()?;
        let range = rest.iter().fold(Self { min: first, max: first }, |r, &d| Self {
            min: r.min.min(d),
            max: r.max.max(d),
        });
        Some(range)
    }

    /// Map `w` into [0, 1]; degenerate ranges map to [`NEUTRAL_DEPTH`]
    pub fn normalize(&self, w: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return NEUTRAL_DEPTH;
        }
        let t = (w - self.min) / span;
        if t.is_nan() {
            NEUTRAL_DEPTH
        } else {
            t.clamp(0.0, 1.0)
        }
    }
}

/// Normalize every depth against the slice's own range
pub fn normalize_depths(depths: &[f64]) -> Vec<f64> {
    match DepthRange::from_depths(depths) {
        Some(range) => depths.iter().map(|&w| range.normalize(w)).collect(),
        None => Vec::new(),
    }
}

/// Fill color of a cube vertex
pub fn vertex_color(depth: f64) -> Rgba {
    let d = depth as f32;
    Rgba::new(1.0, d, d, VERTEX_ALPHA)
}

/// Opaque endpoint color of a cube edge gradient
pub fn edge_color(depth: f64) -> Rgba {
    let d = depth as f32;
    Rgba::new(1.0, d, d, 1.0)
}

/// Solid color of an axis edge (0=X, 1=Y, 2=Z, 3=W)
pub fn axis_color(axis: usize) -> Rgba {
    AXIS_COLORS[axis]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_from_depths() {
        let range = DepthRange::from_depths(&[3.0, -1.0, 2.0]).unwrap();
        assert_eq!(range.min, -1.0);
        assert_eq!(range.max, 3.0);
        assert!(DepthRange::from_depths(&[]).is_none());
    }

    #[test]
    fn test_normalize_endpoints() {
        let range = DepthRange { min: 2.0, max: 6.0 };
        assert_eq!(range.normalize(2.0), 0.0);
        assert_eq!(range.normalize(6.0), 1.0);
        assert_eq!(range.normalize(4.0), 0.5);
    }

    #[test]
    fn test_equal_depths_are_neutral() {
        let depths = normalize_depths(&[3.8125; 16]);
        assert_eq!(depths.len(), 16);
        assert!(depths.iter().all(|&d| d == NEUTRAL_DEPTH));
    }

    #[test]
    fn test_normalized_depths_in_unit_range() {
        let depths = normalize_depths(&[1.5, 3.0, 2.25, 2.9, 1.6]);
        assert!(depths.iter().all(|d| (0.0..=1.0).contains(d)));
        assert_eq!(depths[0], 0.0);
        assert_eq!(depths[1], 1.0);
    }

    #[test]
    fn test_vertex_and_edge_colors() {
        assert_eq!(vertex_color(0.25), Rgba::new(1.0, 0.25, 0.25, 0.8));
        assert_eq!(edge_color(1.0), Rgba::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_axis_colors() {
        assert_eq!(axis_color(0), Rgba::new(1.0, 0.3, 0.3, 1.0));
        assert_eq!(axis_color(1), Rgba::new(0.0, 0.7, 0.0, 1.0));
        assert_eq!(axis_color(2), Rgba::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(axis_color(3), Rgba::new(0.9, 0.0, 0.8, 1.0));
    }
}
