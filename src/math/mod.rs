//! Math primitives shared across the crate.
//!
//! All mesh attribute data is single precision: the output contract is GPU
//! vertex-buffer content, which is stored and uploaded as `f32`. Position
//! functions widen to `f64` internally and narrow their final result.

/// 2D point type.
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f32>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f32>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Chosen above `f32::EPSILON` so degeneracy checks stay meaningful on
/// single-precision data.
pub const TOLERANCE: f32 = 1e-6;
