use crate::error::{OperationError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::TriangleMesh;

/// Corner signs for the two triangles of the plane, wound counter-clockwise
/// seen from +Z.
#[rustfmt::skip]
const CORNERS: [[f32; 2]; 6] = [
    [-1.0,  1.0], [ 1.0, -1.0], [ 1.0,  1.0],
    [-1.0,  1.0], [-1.0, -1.0], [ 1.0, -1.0],
];

/// Creates a square plane in the `z = 0` plane, centered at the origin.
///
/// `size` is the half-extent of the square and `tiles` the number of
/// texture repeats from the center to each edge, so a tiling texture
/// repeats `2 * tiles` times across the plane.
pub struct MakeGroundPlane {
    size: f32,
    tiles: f32,
}

impl MakeGroundPlane {
    /// Creates a new `MakeGroundPlane` operation.
    #[must_use]
    pub fn new(size: f32, tiles: f32) -> Self {
        Self { size, tiles }
    }

    /// Executes the operation, returning the plane mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not finite or near zero, or if the
    /// tile count is not positive.
    pub fn execute(&self) -> Result<TriangleMesh> {
        // A plain `< TOLERANCE` check would let NaN through.
        if !self.size.is_finite() || self.size < TOLERANCE {
            return Err(OperationError::InvalidInput("plane size must be positive".into()).into());
        }
        if !self.tiles.is_finite() || self.tiles <= 0.0 {
            return Err(OperationError::InvalidInput("tile count must be positive".into()).into());
        }

        let mut mesh = TriangleMesh::with_capacity(6);
        for [cu, cv] in CORNERS {
            mesh.positions
                .push(Point3::new(cu * self.size, cv * self.size, 0.0));
            mesh.normals.push(Vector3::z());
            mesh.texcoords
                .push(Point2::new(cu * self.tiles, cv * self.tiles));
        }

        Ok(mesh)
    }
}
