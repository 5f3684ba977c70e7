use crate::math::{Matrix4, Point3, Vector3};

/// A perspective camera described by a look-at frame and frustum bounds.
///
/// The aspect ratio is not stored; the consumer passes it to
/// [`projection_matrix`](Self::projection_matrix) because it changes with
/// the viewport, while everything else is fixed at assembly time.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Eye position.
    pub eye: Point3,
    /// Point the camera looks at.
    pub target: Point3,
    /// Up direction.
    pub up: Vector3,
    /// Vertical field of view in radians.
    pub fovy: f32,
    /// Near clip plane distance.
    pub znear: f32,
    /// Far clip plane distance.
    pub zfar: f32,
}

impl CameraInfo {
    /// Creates a new camera description.
    #[must_use]
    pub fn new(
        eye: Point3,
        target: Point3,
        up: Vector3,
        fovy: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            fovy,
            znear,
            zfar,
        }
    }

    /// Returns the right-handed world-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        Matrix4::look_at_rh(&self.eye, &self.target, &self.up)
    }

    /// Returns the perspective projection matrix for the given aspect ratio.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4 {
        Matrix4::new_perspective(aspect, self.fovy, self.znear, self.zfar)
    }
}
