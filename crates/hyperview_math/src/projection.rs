//! Two-stage perspective projection (4D → 3D → 2D)
//!
//! Both stages share one structure: translate the point away from the viewer
//! along its last spatial axis, multiply by `scale * (perspective * depthmap)`
//! in homogeneous coordinates, then divide by the homogeneous slot.
//!
//! Stage A remaps w into a perspective depth and keeps it in the output's w.
//! Stage B has no spare spatial axis left, so it carries the incoming w (the
//! stage A depth) through unchanged. That value drives the depth coloring.

use serde::{Serialize, Deserialize};

use crate::matrix::{Matrix, MatrixError};
use crate::point::{Point2, Point4};

/// Distance the model is pushed along w before the 4D → 3D stage
pub const W_OFFSET: f64 = 4.0;

/// Distance the model is pushed along z before the 3D → 2D stage
pub const Z_OFFSET: f64 = 4.8;

/// Shared camera parameters of both projection stages
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveParams {
    /// Field of view in radians
    pub fov: f64,
    /// Near plane
    pub near: f64,
    /// Far plane
    pub far: f64,
}

impl Default for PerspectiveParams {
    fn default() -> Self {
        Self {
            fov: std::f64::consts::PI / 1.8,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl PerspectiveParams {
    /// Uniform scale mapping the near-plane extent to [-1, 1]
    pub fn scale_factor(&self) -> f64 {
        let top_right = self.near * (self.fov / 2.0).tan();
        let bottom_left = -top_right;
        2.0 / (top_right - bottom_left)
    }

    /// Depth remap constants `(c1, c2)`
    pub fn depth_constants(&self) -> (f64, f64) {
        let c1 = 2.0 * self.far * self.near / (self.near - self.far);
        let c2 = (self.far + self.near) / (self.far - self.near);
        (c1, c2)
    }

    /// Combined `scale * (perspective * depthmap)` for a stage with
    /// `spatial` scaled axes and the depth axis at index `spatial`.
    ///
    /// The returned matrix is `(spatial + 2)` square. The homogeneous slot
    /// is the last row.
    fn stage_matrix(&self, spatial: usize) -> Result<Matrix, MatrixError> {
        let n = spatial + 2;
        let depth = spatial;
        let homogeneous = spatial + 1;

        let mut perspective = vec![1.0; n];
        let mut scale = vec![1.0; n];
        let s = self.scale_factor();
        for i in 0..spatial {
            perspective[i] = self.near;
            scale[i] = s;
        }

        let (c1, c2) = self.depth_constants();
        let mut depthmap = Matrix::identity(n);
        depthmap.set(depth, depth, -c2);
        depthmap.set(depth, homogeneous, -1.0);
        depthmap.set(homogeneous, depth, c1);
        depthmap.set(homogeneous, homogeneous, 0.0);

        let perspective = Matrix::diagonal(&perspective);
        let scale = Matrix::diagonal(&scale);
        scale.multiply(&perspective.multiply(&depthmap)?)
    }
}

/// The full 4D → 2D projection with its stage matrices prebuilt
#[derive(Clone, Debug)]
pub struct Projection {
    params: PerspectiveParams,
    /// 5x5 matrix of stage A
    four_to_three: Matrix,
    /// 4x4 matrix of stage B
    three_to_two: Matrix,
}

impl Projection {
    pub fn new(params: PerspectiveParams) -> Result<Self, MatrixError> {
        Ok(Self {
            params,
            four_to_three: params.stage_matrix(3)?,
            three_to_two: params.stage_matrix(2)?,
        })
    }

    pub fn params(&self) -> &PerspectiveParams {
        &self.params
    }

    /// Stage A: 4D → 3D. The output w holds the remapped depth.
    ///
    /// Expects a point already translated along w.
    pub fn project_4d_to_3d(&self, point: Point4) -> Result<Point4, MatrixError> {
        let r = self.four_to_three.multiply(&point.to_homogeneous())?;
        let h = r.get(4, 0);
        Ok(Point4::new(r.get(0, 0) / h, r.get(1, 0) / h, r.get(2, 0) / h, r.get(3, 0) / h))
    }

    /// Stage B: 3D → 2D. The incoming w passes through untouched.
    ///
    /// Expects a point already translated along z.
    pub fn project_3d_to_2d(&self, point: Point4) -> Result<Point4, MatrixError> {
        let column = Matrix::column(&[point.x, point.y, point.z, 1.0]);
        let r = self.three_to_two.multiply(&column)?;
        let h = r.get(3, 0);
        Ok(Point4::new(r.get(0, 0) / h, r.get(1, 0) / h, r.get(2, 0) / h, point.w))
    }

    /// Run both stages, including the viewer offsets.
    ///
    /// The result's x and y are the 2D position, w is the depth proxy.
    pub fn project(&self, point: Point4) -> Result<Point4, MatrixError> {
        let p = self.project_4d_to_3d(point.translated(3, -W_OFFSET))?;
        self.project_3d_to_2d(p.translated(2, -Z_OFFSET))
    }
}

/// Position on the projection plane of a fully projected point
#[inline]
pub fn screen_position(projected: Point4) -> Point2 {
    Point2::new(projected.x, projected.y)
}
