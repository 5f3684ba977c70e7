use crate::error::{OperationError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::TriangleMesh;

/// Per-vertex corner signs, face normal, and per-vertex texcoords for the
/// 12 hand-enumerated cube triangles. Corners are scaled by the half-extent
/// at build time; winding is counter-clockwise seen from outside.
#[rustfmt::skip]
const TRIANGLES: [([[f32; 3]; 3], [f32; 3], [[f32; 2]; 3]); 12] = [
    // +X face
    ([[ 1.0, -1.0,  1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0]], [ 1.0,  0.0,  0.0], [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]),
    ([[ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0]], [ 1.0,  0.0,  0.0], [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]),
    // -Y face
    ([[-1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0]], [ 0.0, -1.0,  0.0], [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]),
    ([[-1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0]], [ 0.0, -1.0,  0.0], [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]),
    // +Z face
    ([[-1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0]], [ 0.0,  0.0,  1.0], [[0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]),
    ([[-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0]], [ 0.0,  0.0,  1.0], [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0]]),
    // -X face
    ([[-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0], [-1.0,  1.0, -1.0]], [-1.0,  0.0,  0.0], [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]),
    ([[-1.0, -1.0,  1.0], [-1.0,  1.0, -1.0], [-1.0, -1.0, -1.0]], [-1.0,  0.0,  0.0], [[0.0, 1.0], [1.0, 0.0], [0.0, 0.0]]),
    // +Y face
    ([[-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0]], [ 0.0,  1.0,  0.0], [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]),
    ([[-1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0], [-1.0,  1.0, -1.0]], [ 0.0,  1.0,  0.0], [[0.0, 1.0], [1.0, 0.0], [0.0, 0.0]]),
    // -Z face
    ([[-1.0,  1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0]], [ 0.0,  0.0, -1.0], [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]),
    ([[-1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0]], [ 0.0,  0.0, -1.0], [[0.0, 1.0], [1.0, 0.0], [0.0, 0.0]]),
];

/// Creates an axis-aligned cube mesh centered at the origin.
///
/// `size` is the half-extent: vertices lie at `(±size, ±size, ±size)`.
/// Six faces, two triangles each, flat axis-aligned normals, unit texcoords
/// per face. Used both as a regular shape and, with a large size, as a
/// skybox volume drawn from the inside.
pub struct MakeCube {
    size: f32,
}

impl MakeCube {
    /// Creates a new `MakeCube` operation.
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Executes the operation, returning the cube mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is not finite or near zero.
    pub fn execute(&self) -> Result<TriangleMesh> {
        // A plain `< TOLERANCE` check would let NaN through.
        if !self.size.is_finite() || self.size < TOLERANCE {
            return Err(OperationError::InvalidInput("cube size must be positive".into()).into());
        }

        let s = self.size;
        let mut mesh = TriangleMesh::with_capacity(36);
        for (corners, normal, uvs) in &TRIANGLES {
            let normal = Vector3::new(normal[0], normal[1], normal[2]);
            for (corner, uv) in corners.iter().zip(uvs) {
                mesh.positions
                    .push(Point3::new(corner[0] * s, corner[1] * s, corner[2] * s));
                mesh.normals.push(normal);
                mesh.texcoords.push(Point2::new(uv[0], uv[1]));
            }
        }

        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ParameshError;

    #[test]
    fn cube_has_36_vertices_in_parallel_streams() {
        let mesh = MakeCube::new(1.0).execute().unwrap();
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.normals.len(), 36);
        assert_eq!(mesh.texcoords.len(), 36);
    }

    #[test]
    fn normals_are_axis_aligned_six_vertices_each() {
        let mesh = MakeCube::new(1.0).execute().unwrap();
        let axes = [
            Vector3::x(),
            -Vector3::x(),
            Vector3::y(),
            -Vector3::y(),
            Vector3::z(),
            -Vector3::z(),
        ];
        for axis in axes {
            let count = mesh.normals.iter().filter(|n| **n == axis).count();
            assert_eq!(count, 6, "axis {axis:?} should cover one face");
        }
    }

    #[test]
    fn corners_sit_at_the_half_extent() {
        let mesh = MakeCube::new(2.0).execute().unwrap();
        for p in &mesh.positions {
            for c in [p.x, p.y, p.z] {
                assert!((c.abs() - 2.0).abs() < TOLERANCE, "component {c} not at ±2");
            }
        }
    }

    #[test]
    fn winding_faces_outward() {
        // cross(b - a, c - a) must point along the stored face normal.
        let mesh = MakeCube::new(1.0).execute().unwrap();
        for (tri, normals) in mesh
            .positions
            .chunks_exact(3)
            .zip(mesh.normals.chunks_exact(3))
        {
            let cross = (tri[1] - tri[0]).cross(&(tri[2] - tri[0]));
            assert!(cross.dot(&normals[0]) > 0.0);
        }
    }

    #[test]
    fn each_face_spans_the_unit_texture_cell() {
        let mesh = MakeCube::new(1.0).execute().unwrap();
        for t in &mesh.texcoords {
            for c in [t.x, t.y] {
                assert!(c.abs() < TOLERANCE || (c - 1.0).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(MakeCube::new(0.0).execute().is_err());
    }

    #[test]
    fn non_finite_size_is_rejected() {
        for size in [f32::NAN, f32::INFINITY] {
            assert!(matches!(
                MakeCube::new(size).execute(),
                Err(ParameshError::Operation(OperationError::InvalidInput(_)))
            ));
        }
    }
}
