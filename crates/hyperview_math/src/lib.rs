//! 4D Mathematics Library
//!
//! This crate provides the numeric pipeline of the Hyperview tesseract viewer.
//!
//! ## Core Types
//!
//! - [`Matrix`] - runtime-sized matrix with checked products
//! - [`Point4`] - 4D point with x, y, z, w components
//! - [`RotationOrder`] - ordered composition of the six plane rotations
//! - [`Projection`] - the cascaded 4D → 3D → 2D perspective projection

pub mod matrix;
mod point;
pub mod rotation;
pub mod projection;

pub use matrix::{Matrix, MatrixError, Shape, multiply};
pub use point::{Point2, Point4};
pub use rotation::{PlaneAngles, RotationOrder, RotationPlane, plane_rotation};
pub use projection::{PerspectiveParams, Projection};
