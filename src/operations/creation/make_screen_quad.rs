use crate::math::{Point2, Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// Corner positions of the quad in normalized device coordinates, wound
/// counter-clockwise toward the viewer.
#[rustfmt::skip]
const CORNERS: [[f32; 2]; 6] = [
    [-1.0,  1.0], [ 1.0, -1.0], [ 1.0,  1.0],
    [-1.0,  1.0], [-1.0, -1.0], [ 1.0, -1.0],
];

/// Creates a full-screen quad spanning `[-1, 1]^2` at `z = 0`.
///
/// Intended for render-to-texture passes; positions are already in
/// normalized device coordinates and texcoords cover the unit square.
/// Always succeeds, so unlike the other creation operations `execute`
/// returns the mesh directly.
#[derive(Default)]
pub struct MakeScreenQuad {}

impl MakeScreenQuad {
    /// Creates a new `MakeScreenQuad` operation.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Executes the operation, returning the quad mesh.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        let mut mesh = TriangleMesh::with_capacity(6);
        for [x, y] in CORNERS {
            mesh.positions.push(Point3::new(x, y, 0.0));
            mesh.normals.push(Vector3::z());
            mesh.texcoords
                .push(Point2::new((x + 1.0) / 2.0, (y + 1.0) / 2.0));
        }
        mesh
    }
}
