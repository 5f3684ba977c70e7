use crate::error::Result;
use crate::geometry::surface::{PositionFn, SurfaceDomain};

use super::{GridResolution, MorphPair, TessellateSurface};

/// Tessellates two surfaces over one shared grid for blended drawing.
///
/// The consumer binds both vertex streams to a single draw call and blends
/// position and normal between them in the vertex stage. Sharing one
/// resolution makes the streams pair up vertex-for-vertex, so no count
/// check can fail at draw time.
pub struct TessellateMorphPair {
    base_fn: PositionFn,
    base_domain: SurfaceDomain,
    target_fn: PositionFn,
    target_domain: SurfaceDomain,
    resolution: GridResolution,
}

impl TessellateMorphPair {
    /// Creates a new `TessellateMorphPair` operation.
    #[must_use]
    pub fn new(
        base_fn: PositionFn,
        base_domain: SurfaceDomain,
        target_fn: PositionFn,
        target_domain: SurfaceDomain,
        resolution: GridResolution,
    ) -> Self {
        Self {
            base_fn,
            base_domain,
            target_fn,
            target_domain,
            resolution,
        }
    }

    /// Executes both tessellations, returning the paired meshes.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution has a zero cell count or either
    /// domain contains a non-finite value.
    pub fn execute(&self) -> Result<MorphPair> {
        let base =
            TessellateSurface::new(self.base_fn, self.base_domain, self.resolution).execute()?;
        let target =
            TessellateSurface::new(self.target_fn, self.target_domain, self.resolution).execute()?;
        Ok(MorphPair { base, target })
    }
}
