use crate::error::{Result, TessellationError};
use crate::geometry::surface::{PositionFn, SurfaceDomain};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

use super::{GridResolution, TriangleMesh};

/// Tessellates a parametric surface into a flat-shaded triangle soup.
///
/// The domain is partitioned into a regular `u_cells x v_cells` grid and
/// every cell is split into two triangles along its aa-bb diagonal, with
/// corners named by which coordinate is advanced:
///
/// ```text
/// ab ---- bb        upper-left:  (aa, ab, ba)
///  |  \    |        lower-right: (bb, ba, ab)
///  |    \  |
/// aa ---- ba
/// ```
///
/// The split direction is uniform across the grid. The domain is treated
/// as open: no wraparound stitching between the last and first step, even
/// for periodic surfaces, so a seam at the domain boundary is expected.
/// Grid coordinates and texcoords are computed in `f32`; drift over many
/// steps is tolerated, not corrected.
pub struct TessellateSurface {
    position_fn: PositionFn,
    domain: SurfaceDomain,
    resolution: GridResolution,
}

impl TessellateSurface {
    /// Creates a new `TessellateSurface` operation.
    #[must_use]
    pub fn new(position_fn: PositionFn, domain: SurfaceDomain, resolution: GridResolution) -> Self {
        Self {
            position_fn,
            domain,
            resolution,
        }
    }

    /// Executes the tessellation, returning the triangle soup.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution has a zero cell count on either
    /// axis or the domain contains a non-finite value.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let GridResolution { u_cells, v_cells } = self.resolution;
        if u_cells == 0 || v_cells == 0 {
            return Err(TessellationError::InvalidParameters(
                "grid resolution must have at least one cell per axis".into(),
            )
            .into());
        }

        let d = self.domain;
        let finite = d.u_min.is_finite()
            && d.u_max.is_finite()
            && d.v_min.is_finite()
            && d.v_max.is_finite()
            && d.shape.is_finite()
            && d.scale.is_finite();
        if !finite {
            return Err(TessellationError::InvalidParameters(
                "surface domain must be finite".into(),
            )
            .into());
        }

        let udelta = (d.u_max - d.u_min) / u_cells as f32;
        let vdelta = (d.v_max - d.v_min) / v_cells as f32;
        let txdelta = 1.0 / u_cells as f32;
        let tydelta = 1.0 / v_cells as f32;

        let mut mesh = TriangleMesh::with_capacity(self.resolution.vertex_count());

        for ustep in 0..u_cells {
            let u = d.u_min + ustep as f32 * udelta;
            let tx = ustep as f32 * txdelta;
            for vstep in 0..v_cells {
                let v = d.v_min + vstep as f32 * vdelta;
                let ty = vstep as f32 * tydelta;

                // Cell corners, named by which coordinate is advanced.
                let aa = self.position_fn.evaluate(u, v, d.shape, d.scale);
                let ab = self.position_fn.evaluate(u, v + vdelta, d.shape, d.scale);
                let ba = self.position_fn.evaluate(u + udelta, v, d.shape, d.scale);
                let bb = self
                    .position_fn
                    .evaluate(u + udelta, v + vdelta, d.shape, d.scale);

                emit_triangle(
                    &mut mesh,
                    [aa, ab, ba],
                    [
                        Point2::new(tx, ty),
                        Point2::new(tx, ty + tydelta),
                        Point2::new(tx + txdelta, ty),
                    ],
                );
                emit_triangle(
                    &mut mesh,
                    [bb, ba, ab],
                    [
                        Point2::new(tx + txdelta, ty + tydelta),
                        Point2::new(tx + txdelta, ty),
                        Point2::new(tx, ty + tydelta),
                    ],
                );
            }
        }

        Ok(mesh)
    }
}

/// Pushes one triangle with a flat normal derived from its corners.
///
/// The normal is `normalize(cross(c - a, b - a))`, anchored at the first
/// emitted vertex and duplicated to all three. A zero-area triangle (cross
/// norm below tolerance) falls back to +Z instead of normalizing zero.
fn emit_triangle(mesh: &mut TriangleMesh, corners: [Point3; 3], texcoords: [Point2; 3]) {
    let [a, b, c] = corners;
    let cross = (c - a).cross(&(b - a));
    let len = cross.norm();
    let normal = if len < TOLERANCE {
        Vector3::z()
    } else {
        cross / len
    };

    mesh.positions.extend(corners);
    mesh.normals.extend([normal; 3]);
    mesh.texcoords.extend(texcoords);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::surface::{klein, moebius};

    fn flat_sheet(u: f32, v: f32, _shape: f32, scale: f32) -> Point3 {
        Point3::new(u * scale, v * scale, 0.0)
    }

    fn unit_grid(u_cells: usize, v_cells: usize) -> TriangleMesh {
        TessellateSurface::new(
            PositionFn::Custom(flat_sheet),
            SurfaceDomain::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0),
            GridResolution::new(u_cells, v_cells),
        )
        .execute()
        .unwrap()
    }

    #[test]
    fn streams_are_parallel_with_six_vertices_per_cell() {
        for (u_cells, v_cells) in [(1, 1), (2, 3), (8, 4)] {
            let mesh = unit_grid(u_cells, v_cells);
            let expected = 6 * u_cells * v_cells;
            assert_eq!(mesh.positions.len(), expected);
            assert_eq!(mesh.normals.len(), expected);
            assert_eq!(mesh.texcoords.len(), expected);
            assert_eq!(mesh.triangle_count(), 2 * u_cells * v_cells);
        }
    }

    #[test]
    fn winding_follows_the_fixed_diagonal_split() {
        let mesh = unit_grid(1, 1);
        let aa = Point3::new(0.0, 0.0, 0.0);
        let ab = Point3::new(0.0, 1.0, 0.0);
        let ba = Point3::new(1.0, 0.0, 0.0);
        let bb = Point3::new(1.0, 1.0, 0.0);
        assert_eq!(mesh.positions[0], aa);
        assert_eq!(mesh.positions[1], ab);
        assert_eq!(mesh.positions[2], ba);
        assert_eq!(mesh.positions[3], bb);
        assert_eq!(mesh.positions[4], ba);
        assert_eq!(mesh.positions[5], ab);
    }

    #[test]
    fn flat_sheet_normals_point_up() {
        let mesh = unit_grid(3, 3);
        for n in &mesh.normals {
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn normals_within_a_triangle_are_parallel_unit_vectors() {
        let mesh = TessellateSurface::new(
            PositionFn::KleinBottle,
            klein::natural_domain(),
            GridResolution::new(6, 6),
        )
        .execute()
        .unwrap();
        for tri in mesh.normals.chunks_exact(3) {
            for n in tri {
                assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-5);
            }
            assert!(tri[0].dot(&tri[1]) > 0.999);
            assert!(tri[0].dot(&tri[2]) > 0.999);
        }
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn texcoords_span_the_unit_square_monotonically() {
        // Power-of-two cell counts keep the f32 texcoord arithmetic exact.
        let cells = 4;
        let mesh = unit_grid(cells, cells);
        for t in &mesh.texcoords {
            assert!((0.0..=1.0).contains(&t.x), "tx out of range: {}", t.x);
            assert!((0.0..=1.0).contains(&t.y), "ty out of range: {}", t.y);
        }
        // The aa corner of each cell is exactly (ustep, vstep) / cells.
        for ustep in 0..cells {
            for vstep in 0..cells {
                let first = (ustep * cells + vstep) * 6;
                assert_eq!(
                    mesh.texcoords[first],
                    Point2::new(ustep as f32 * 0.25, vstep as f32 * 0.25)
                );
            }
        }
        // The bb corner of the last cell reaches (1, 1).
        let last = mesh.texcoords.len() - 3;
        assert_eq!(mesh.texcoords[last], Point2::new(1.0, 1.0));
    }

    #[test]
    fn identical_inputs_give_identical_meshes() {
        let op = TessellateSurface::new(
            PositionFn::KleinBottle,
            klein::natural_domain(),
            GridResolution::new(5, 7),
        );
        let first = op.execute().unwrap();
        let second = op.execute().unwrap();
        assert_eq!(first.positions, second.positions);
        assert_eq!(first.normals, second.normals);
        assert_eq!(first.texcoords, second.texcoords);
    }

    #[test]
    fn single_cell_klein_domain_yields_two_triangles() {
        let mesh = TessellateSurface::new(
            PositionFn::KleinBottle,
            klein::natural_domain(),
            GridResolution::new(1, 1),
        )
        .execute()
        .unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.positions[0], klein::evaluate(0.0, 0.0, 3.0, 0.5));
    }

    #[test]
    fn moebius_grid_has_finite_attributes_everywhere() {
        let mesh = TessellateSurface::new(
            PositionFn::MoebiusStrip,
            moebius::natural_domain(),
            GridResolution::new(4, 4),
        )
        .execute()
        .unwrap();
        assert_eq!(mesh.vertex_count(), 96);
        for p in &mesh.positions {
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        }
        for n in &mesh.normals {
            assert!(n.x.is_finite() && n.y.is_finite() && n.z.is_finite());
        }
    }

    #[test]
    fn zero_cell_resolution_is_rejected() {
        let result = TessellateSurface::new(
            PositionFn::KleinBottle,
            klein::natural_domain(),
            GridResolution::new(0, 5),
        )
        .execute();
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_domain_is_rejected() {
        let domain = SurfaceDomain::new(0.0, f32::NAN, 0.0, 1.0, 3.0, 0.5);
        let result = TessellateSurface::new(
            PositionFn::KleinBottle,
            domain,
            GridResolution::new(2, 2),
        )
        .execute();
        assert!(result.is_err());
    }

    #[test]
    fn degenerate_cells_fall_back_to_z_normals() {
        fn collapsed(_u: f32, _v: f32, _shape: f32, _scale: f32) -> Point3 {
            Point3::origin()
        }
        let mesh = TessellateSurface::new(
            PositionFn::Custom(collapsed),
            SurfaceDomain::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0),
            GridResolution::new(2, 2),
        )
        .execute()
        .unwrap();
        for n in &mesh.normals {
            assert_eq!(*n, Vector3::z());
        }
    }
}
