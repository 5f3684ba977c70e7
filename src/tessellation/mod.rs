mod tessellate_morph;
mod tessellate_surface;

pub use tessellate_morph::TessellateMorphPair;
pub use tessellate_surface::TessellateSurface;

use crate::math::{Point2, Point3, Vector3};

/// Grid resolution for surface tessellation.
///
/// Counts cells, not samples: every cell emits two triangles, so a grid
/// produces `6 * u_cells * v_cells` vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridResolution {
    /// Number of grid cells along the U axis.
    pub u_cells: usize,
    /// Number of grid cells along the V axis.
    pub v_cells: usize,
}

impl GridResolution {
    /// Creates a new grid resolution.
    #[must_use]
    pub fn new(u_cells: usize, v_cells: usize) -> Self {
        Self { u_cells, v_cells }
    }

    /// Returns the number of grid cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.u_cells * self.v_cells
    }

    /// Returns the number of emitted triangles (two per cell).
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        2 * self.cell_count()
    }

    /// Returns the number of emitted vertices (three per triangle).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        3 * self.triangle_count()
    }
}

/// A triangle mesh as flat attribute streams.
///
/// Triangle soup: consecutive position triples form triangles; there is no
/// index buffer, and vertices shared between triangles are duplicated. The
/// three streams are parallel (equal length, same flat vertex order); the
/// consumer uploads each to a GPU buffer as-is.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Point3>,
    /// Per-vertex normals (unit length, flat per triangle).
    pub normals: Vec<Vector3>,
    /// Texture coordinates.
    pub texcoords: Vec<Point2>,
}

impl TriangleMesh {
    /// Creates an empty mesh with all three streams pre-allocated for
    /// `vertices` entries.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            texcoords: Vec::with_capacity(vertices),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns `true` if the mesh has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Two meshes over the same grid, blended by the consumer in one draw call.
///
/// Vertex counts are equal by construction. The texcoord streams are
/// identical (they depend only on the grid), so consumers bind `base`'s
/// stream once for both meshes.
#[derive(Debug, Clone, Default)]
pub struct MorphPair {
    /// The mesh shown at blend factor 0.
    pub base: TriangleMesh,
    /// The mesh shown at blend factor 1.
    pub target: TriangleMesh,
}
