use crate::math::{Point3, Vector3};

/// A point light placed on a sphere around the origin.
///
/// Placement uses spherical angles so a renderer can orbit the light by
/// advancing `phi`; the Phong terms are passed through untouched.
#[derive(Debug, Clone)]
pub struct LightInfo {
    /// Distance from the origin.
    pub orbit_radius: f32,
    /// Azimuth angle in radians, measured in the xy plane from +X.
    pub phi: f32,
    /// Elevation angle in radians above the xy plane.
    pub theta: f32,
    /// Ambient color term.
    pub ambient: Vector3,
    /// Diffuse color term.
    pub diffuse: Vector3,
    /// Specular color term.
    pub specular: Vector3,
}

impl LightInfo {
    /// Creates a new light description.
    #[must_use]
    pub fn new(
        orbit_radius: f32,
        phi: f32,
        theta: f32,
        ambient: Vector3,
        diffuse: Vector3,
        specular: Vector3,
    ) -> Self {
        Self {
            orbit_radius,
            phi,
            theta,
            ambient,
            diffuse,
            specular,
        }
    }

    /// Resolves the spherical placement to a world-space position.
    #[must_use]
    pub fn position(&self) -> Point3 {
        Point3::new(
            self.phi.cos() * self.theta.cos(),
            self.phi.sin() * self.theta.cos(),
            self.theta.sin(),
        ) * self.orbit_radius
    }
}
