//! Plane rotations in 4D
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//!
//! Rotations in different planes do not commute, so the order in which the
//! six plane rotations are applied is part of the visible result. It is
//! carried explicitly by [`RotationOrder`].

use serde::{Serialize, Deserialize};

use crate::matrix::{Matrix, MatrixError};
use crate::point::Point4;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane, axes (0, 1)
    XY,
    /// XZ plane, axes (0, 2)
    XZ,
    /// XW plane, axes (0, 3)
    XW,
    /// YZ plane, axes (1, 2)
    YZ,
    /// YW plane, axes (1, 3)
    YW,
    /// ZW plane, axes (2, 3)
    ZW,
}

impl RotationPlane {
    /// All planes in canonical order
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis indices spanning the plane (0=X, 1=Y, 2=Z, 3=W)
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Position of the plane in [`RotationPlane::ALL`]
    pub const fn index(self) -> usize {
        match self {
            RotationPlane::XY => 0,
            RotationPlane::XZ => 1,
            RotationPlane::XW => 2,
            RotationPlane::YZ => 3,
            RotationPlane::YW => 4,
            RotationPlane::ZW => 5,
        }
    }
}

/// Create a 4x4 rotation matrix in the plane spanned by axes `a` and `b`.
///
/// Identity except `(a,a) = cos`, `(a,b) = sin`, `(b,a) = -sin`, `(b,b) = cos`.
pub fn plane_rotation(angle: f64, a: usize, b: usize) -> Matrix {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = Matrix::identity(4);
    m.set(a, a, cs);
    m.set(a, b, sn);
    m.set(b, a, -sn);
    m.set(b, b, cs);
    m
}

/// Rotation matrix for a named plane
pub fn rotation_in(plane: RotationPlane, angle: f64) -> Matrix {
    let (a, b) = plane.axes();
    plane_rotation(angle, a, b)
}

/// One angle per rotation plane, indexed by [`RotationPlane::index`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaneAngles(pub [f64; 6]);

impl PlaneAngles {
    pub const ZERO: Self = Self([0.0; 6]);

    #[inline]
    pub fn get(&self, plane: RotationPlane) -> f64 {
        self.0[plane.index()]
    }

    #[inline]
    pub fn set(&mut self, plane: RotationPlane, angle: f64) {
        self.0[plane.index()] = angle;
    }

    #[inline]
    pub fn add(&mut self, plane: RotationPlane, delta: f64) {
        self.0[plane.index()] += delta;
    }
}

/// Ordered list of planes in which rotations are applied
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationOrder {
    planes: Vec<RotationPlane>,
}

impl Default for RotationOrder {
    fn default() -> Self {
        Self::new(RotationPlane::ALL.to_vec())
    }
}

impl RotationOrder {
    pub fn new(planes: Vec<RotationPlane>) -> Self {
        Self { planes }
    }

    pub fn planes(&self) -> &[RotationPlane] {
        &self.planes
    }

    /// Rotate a point, left-multiplying each plane rotation in list order
    pub fn apply(&self, point: Point4, angles: &PlaneAngles) -> Result<Point4, MatrixError> {
        self.planes
            .iter()
            .try_fold(point, |p, &plane| p.apply(&rotation_in(plane, angles.get(plane))))
    }

    /// Single matrix equivalent to [`RotationOrder::apply`]
    pub fn compose(&self, angles: &PlaneAngles) -> Result<Matrix, MatrixError> {
        self.planes.iter().try_fold(Matrix::identity(4), |acc, &plane| {
            rotation_in(plane, angles.get(plane)).multiply(&acc)
        })
    }
}
