//! Mapping from the projection plane to the surface
//!
//! The projection plane is shown with a fixed vertical half-extent; the
//! horizontal extent follows the aspect ratio. Plane y grows downward on
//! screen.

use hyperview_math::Point2;

/// World units from the center to the top edge of the surface
pub const DEFAULT_HALF_EXTENT: f64 = 2.0;

/// Surface size plus the visible extent of the projection plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub half_extent: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_half_extent(width, height, DEFAULT_HALF_EXTENT)
    }

    pub fn with_half_extent(width: u32, height: u32, half_extent: f64) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
            half_extent,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.half_extent > 0.0
    }

    /// Pixels per world unit
    #[inline]
    pub fn factor(&self) -> f64 {
        self.height / (2.0 * self.half_extent)
    }

    /// Horizontal shift that centers the plane origin
    #[inline]
    pub fn x_offset(&self) -> f64 {
        self.half_extent * self.width / self.height
    }

    /// Surface pixel, origin top-left
    pub fn to_pixel(&self, p: Point2) -> [f64; 2] {
        let factor = self.factor();
        [factor * (p.x + self.x_offset()), factor * (p.y + self.half_extent)]
    }

    /// Clip-space position, y up
    pub fn to_clip(&self, p: Point2) -> [f32; 2] {
        let [px, py] = self.to_pixel(p);
        [
            (px / self.width * 2.0 - 1.0) as f32,
            (1.0 - py / self.height * 2.0) as f32,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_default_window_mapping() {
        let v = Viewport::new(640, 480);
        assert!(approx_eq(v.factor(), 120.0));
        assert!(approx_eq(v.x_offset(), 2.0 * 640.0 / 480.0));
    }

    #[test]
    fn test_origin_is_surface_center() {
        let v = Viewport::new(640, 480);
        let [px, py] = v.to_pixel(Point2::new(0.0, 0.0));
        assert!(approx_eq(px, 320.0));
        assert!(approx_eq(py, 240.0));
        let [cx, cy] = v.to_clip(Point2::new(0.0, 0.0));
        assert!(cx.abs() < 1e-6 && cy.abs() < 1e-6);
    }

    #[test]
    fn test_top_edge_and_y_direction() {
        let v = Viewport::new(640, 480);
        let [_, top] = v.to_pixel(Point2::new(0.0, -2.0));
        assert!(approx_eq(top, 0.0));
        // positive plane y is below center, so clip y is negative
        assert!(v.to_clip(Point2::new(0.0, 1.0))[1] < 0.0);
        assert!((v.to_clip(Point2::new(0.0, 2.0))[1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_validity() {
        assert!(Viewport::new(640, 480).is_valid());
        assert!(!Viewport::new(0, 480).is_valid());
    }
}
