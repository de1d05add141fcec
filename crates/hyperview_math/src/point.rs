//! 4D homogeneous point type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::matrix::{Matrix, MatrixError};

/// Point in 4D space with x, y, z, w components
/// The w component is the 4th spatial axis, not a projective weight
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Point4 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    /// Create a new Point4
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_array(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component by axis index (0=X, 1=Y, 2=Z, 3=W)
    ///
    /// Panics if `axis > 3`.
    #[inline]
    pub fn component(self, axis: usize) -> f64 {
        self.to_array()[axis]
    }

    /// Copy with one component replaced
    #[inline]
    pub fn with_component(self, axis: usize, value: f64) -> Self {
        let mut v = self.to_array();
        v[axis] = value;
        Self::from_array(v)
    }

    /// Copy moved by `delta` along a single axis
    #[inline]
    pub fn translated(self, axis: usize, delta: f64) -> Self {
        self.with_component(axis, self.component(axis) + delta)
    }

    /// Number of coordinates shared exactly with `other`
    pub fn shared_coordinates(self, other: Self) -> usize {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .filter(|(a, b)| a == b)
            .count()
    }

    /// 5x1 column `(x, y, z, w, 1)`
    pub fn to_homogeneous(self) -> Matrix {
        Matrix::column(&[self.x, self.y, self.z, self.w, 1.0])
    }

    /// Apply a 4x4 matrix: returns `m * p` with the point as a column
    pub fn apply(self, m: &Matrix) -> Result<Self, MatrixError> {
        let out = m.multiply(&Matrix::column(&self.to_array()))?;
        if out.shape() != (4, 1) {
            return Err(MatrixError::DimensionMismatch { left: m.shape(), right: (4, 1) });
        }
        Ok(Self::new(out.get(0, 0), out.get(1, 0), out.get(2, 0), out.get(3, 0)))
    }

    /// True if every component is finite
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

impl std::ops::Add for Point4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }
}

impl std::ops::Sub for Point4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }
}

impl std::ops::Mul<f64> for Point4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl std::ops::Neg for Point4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// 2D position on the projection plane
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}
