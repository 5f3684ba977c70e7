use std::f32::consts::{PI, TAU};

use crate::error::{OperationError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::tessellation::TriangleMesh;

/// Creates a sphere mesh from a latitude/longitude grid.
///
/// `segments` is the longitude step count N; the latitude ring count is
/// `N / 2`. Each grid cell emits two triangles, so the mesh has
/// `6 * N * (N / 2)` vertices. Normals are the analytic radial unit
/// vectors (smooth shading), which keeps the degenerate zero-area
/// triangles at the poles harmless; those triangles are emitted as-is.
pub struct MakeSphere {
    radius: f32,
    segments: usize,
}

impl MakeSphere {
    /// Creates a new `MakeSphere` operation.
    #[must_use]
    pub fn new(radius: f32, segments: usize) -> Self {
        Self { radius, segments }
    }

    /// Executes the operation, returning the sphere mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not finite or near zero, or if
    /// `segments < 2`.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        // A plain `< TOLERANCE` check would let NaN through.
        if !self.radius.is_finite() || self.radius < TOLERANCE {
            return Err(
                OperationError::InvalidInput("sphere radius must be positive".into()).into(),
            );
        }
        if self.segments < 2 {
            return Err(OperationError::InvalidInput(
                "sphere needs at least 2 longitude segments".into(),
            )
            .into());
        }

        let n = self.segments;
        let m = n / 2;
        let mut mesh = TriangleMesh::with_capacity(6 * n * m);

        for i in 0..m {
            let theta = PI * i as f32 / m as f32;
            let theta1 = PI * (i + 1) as f32 / m as f32;
            for j in 0..n {
                // Longitude is offset by pi so the texture seam sits on -X.
                let phi = TAU * j as f32 / n as f32 + PI;
                let phi1 = TAU * (j + 1) as f32 / n as f32 + PI;

                let d00 = direction(phi, theta);
                let d10 = direction(phi1, theta);
                let d01 = direction(phi, theta1);
                let d11 = direction(phi1, theta1);

                let t00 = Point2::new(j as f32 / n as f32, 1.0 - i as f32 / m as f32);
                let t10 = Point2::new((j + 1) as f32 / n as f32, 1.0 - i as f32 / m as f32);
                let t01 = Point2::new(j as f32 / n as f32, 1.0 - (i + 1) as f32 / m as f32);
                let t11 = Point2::new((j + 1) as f32 / n as f32, 1.0 - (i + 1) as f32 / m as f32);

                // First triangle of the quad.
                self.push(&mut mesh, d00, t00);
                self.push(&mut mesh, d11, t11);
                self.push(&mut mesh, d10, t10);
                // Second triangle of the quad.
                self.push(&mut mesh, d00, t00);
                self.push(&mut mesh, d01, t01);
                self.push(&mut mesh, d11, t11);
            }
        }

        Ok(mesh)
    }

    fn push(&self, mesh: &mut TriangleMesh, dir: Vector3, uv: Point2) {
        mesh.positions.push(Point3::from(dir * self.radius));
        mesh.normals.push(dir);
        mesh.texcoords.push(uv);
    }
}

/// Unit direction on the sphere at spherical coordinates `(phi, theta)`.
fn direction(phi: f32, theta: f32) -> Vector3 {
    Vector3::new(
        phi.cos() * theta.sin(),
        phi.sin() * theta.sin(),
        theta.cos(),
    )
}
