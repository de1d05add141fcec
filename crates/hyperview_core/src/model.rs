//! Tesseract (4D Hypercube) wireframe model
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w) and
//! 32 edges. The model also carries 8 short axis markers so the orientation
//! of the coordinate frame can be drawn alongside the cube.
//!
//! Point layout:
//! - `0..16`: cube vertices, enumerated x outer → w inner
//! - `16..24`: axis markers +x, -x, +y, -y, +z, -z, +w, -w

use hyperview_math::Point4;

/// Number of tesseract vertices
pub const CUBE_VERTEX_COUNT: usize = 16;
/// Number of axis marker points following the vertices
pub const AXIS_MARKER_COUNT: usize = 8;
/// Total number of model points
pub const POINT_COUNT: usize = CUBE_VERTEX_COUNT + AXIS_MARKER_COUNT;
/// Number of tesseract edges
pub const CUBE_EDGE_COUNT: usize = 32;
/// Number of axis edges (one per axis)
pub const AXIS_EDGE_COUNT: usize = 4;

/// Distance of each axis marker from the origin
pub const AXIS_MARKER_LENGTH: f64 = 0.3;

/// Line segment between two model points
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// The same edge with endpoints swapped
    #[inline]
    pub const fn reversed(self) -> Self {
        Self { a: self.b, b: self.a }
    }

    /// True if both edges join the same two points, in either direction
    #[inline]
    pub fn same_segment(self, other: Self) -> bool {
        self == other || self == other.reversed()
    }
}

/// One frame's model: points and edges rebuilt from canonical coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct TesseractModel {
    points: Vec<Point4>,
    edges: Vec<Edge>,
}

impl Default for TesseractModel {
    fn default() -> Self {
        Self::build()
    }
}

impl TesseractModel {
    /// Build the canonical model
    pub fn build() -> Self {
        let mut points = cube_vertices();
        points.extend(axis_markers());

        let mut edges = cube_edges(&points[..CUBE_VERTEX_COUNT]);
        edges.extend(axis_edges());

        Self { points, edges }
    }

    /// All 24 points
    pub fn points(&self) -> &[Point4] {
        &self.points
    }

    /// Mutable access for in-place transforms
    pub fn points_mut(&mut self) -> &mut [Point4] {
        &mut self.points
    }

    /// The 16 tesseract vertices
    pub fn cube_vertices(&self) -> &[Point4] {
        &self.points[..CUBE_VERTEX_COUNT]
    }

    /// All 36 edges: cube edges first, then axis edges
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The 32 tesseract edges
    pub fn cube_edges(&self) -> &[Edge] {
        &self.edges[..CUBE_EDGE_COUNT]
    }

    /// The 4 axis edges, in x, y, z, w order
    pub fn axis_edges(&self) -> &[Edge] {
        &self.edges[CUBE_EDGE_COUNT..]
    }
}

/// The 16 vertices, x outer loop to w inner loop
///
/// Index 0 is (-1,-1,-1,-1), index 15 is (1,1,1,1).
pub fn cube_vertices() -> Vec<Point4> {
    const SIGNS: [f64; 2] = [-1.0, 1.0];

    let mut vertices = Vec::with_capacity(CUBE_VERTEX_COUNT);
    for x in SIGNS {
        for y in SIGNS {
            for z in SIGNS {
                for w in SIGNS {
                    vertices.push(Point4::new(x, y, z, w));
                }
            }
        }
    }
    vertices
}

/// Positive then negative marker for each axis in turn
pub fn axis_markers() -> Vec<Point4> {
    let mut markers = Vec::with_capacity(AXIS_MARKER_COUNT);
    for axis in 0..4 {
        markers.push(Point4::ORIGIN.with_component(axis, AXIS_MARKER_LENGTH));
        markers.push(Point4::ORIGIN.with_component(axis, -AXIS_MARKER_LENGTH));
    }
    markers
}

/// Connect every pair of vertices that differ in exactly one coordinate.
///
/// Pairs are scanned first index ascending, then second index ascending, and a
/// pair is skipped when its reverse was already recorded, so every edge keeps
/// the lower index first.
pub fn cube_edges(vertices: &[Point4]) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::with_capacity(CUBE_EDGE_COUNT);

    for (p1, &v1) in vertices.iter().enumerate() {
        for (p2, &v2) in vertices.iter().enumerate() {
            // lines only differ in one dimension
            if v1.shared_coordinates(v2) != 3 {
                continue;
            }

            let candidate = Edge::new(p1, p2);
            if edges.iter().any(|e| e.same_segment(candidate)) {
                continue;
            }
            edges.push(candidate);
        }
    }

    edges
}

/// Pair each positive axis marker with its negative counterpart
pub fn axis_edges() -> [Edge; AXIS_EDGE_COUNT] {
    let base = CUBE_VERTEX_COUNT;
    [
        Edge::new(base, base + 1),
        Edge::new(base + 2, base + 3),
        Edge::new(base + 4, base + 5),
        Edge::new(base + 6, base + 7),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_count_and_values() {
        let vertices = cube_vertices();
        assert_eq!(vertices.len(), 16);
        for v in &vertices {
            for c in v.to_array() {
                assert!(c == -1.0 || c == 1.0, "coordinate {} not ±1", c);
            }
        }

        let distinct: HashSet<_> = vertices.iter().map(|v| v.to_array().map(f64::to_bits)).collect();
        assert_eq!(distinct.len(), 16);
    }

    #[test]
    fn test_vertex_order() {
        let vertices = cube_vertices();
        assert_eq!(vertices[0], Point4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(vertices[1], Point4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(vertices[2], Point4::new(-1.0, -1.0, 1.0, -1.0));
        assert_eq!(vertices[8], Point4::new(1.0, -1.0, -1.0, -1.0));
        assert_eq!(vertices[15], Point4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_axis_markers() {
        let markers = axis_markers();
        assert_eq!(markers.len(), 8);
        assert_eq!(markers[0], Point4::new(0.3, 0.0, 0.0, 0.0));
        assert_eq!(markers[1], Point4::new(-0.3, 0.0, 0.0, 0.0));
        assert_eq!(markers[5], Point4::new(0.0, 0.0, -0.3, 0.0));
        assert_eq!(markers[6], Point4::new(0.0, 0.0, 0.0, 0.3));
    }

    #[test]
    fn test_cube_edges() {
        let vertices = cube_vertices();
        let edges = cube_edges(&vertices);
        assert_eq!(edges.len(), 32);

        for e in &edges {
            assert!(e.a < e.b, "edge {:?} is not lower-index first", e);
            assert_eq!(vertices[e.a].shared_coordinates(vertices[e.b]), 3);
            // index bits mirror the coordinate signs
            assert_eq!((e.a ^ e.b).count_ones(), 1);
        }

        for (i, e) in edges.iter().enumerate() {
            for f in &edges[i + 1..] {
                assert!(!e.same_segment(*f), "duplicate edge {:?}", e);
            }
        }
    }

    #[test]
    fn test_first_edges_follow_scan_order() {
        let edges = cube_edges(&cube_vertices());
        assert_eq!(&edges[..4], &[Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 4), Edge::new(0, 8)]);
        assert_eq!(edges[31], Edge::new(14, 15));
    }

    #[test]
    fn test_model_layout() {
        let model = TesseractModel::build();
        assert_eq!(model.points().len(), POINT_COUNT);
        assert_eq!(model.edges().len(), CUBE_EDGE_COUNT + AXIS_EDGE_COUNT);
        assert_eq!(model.cube_edges().len(), 32);
        assert_eq!(
            model.axis_edges(),
            &[Edge::new(16, 17), Edge::new(18, 19), Edge::new(20, 21), Edge::new(22, 23)]
        );
    }

    #[test]
    fn test_axis_edges_join_opposite_markers() {
        let model = TesseractModel::build();
        for e in model.axis_edges() {
            assert_eq!(model.points()[e.a], -model.points()[e.b]);
        }
    }
}
