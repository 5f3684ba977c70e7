use std::f32::consts::TAU;

use crate::math::Point3;

use super::SurfaceDomain;

/// Evaluates the figure-eight Klein bottle immersion at `(u, v)`.
///
/// `x = (aa + cos(v/2) * sin(u) - sin(v/2) * sin(2u)) * cos(v)`
/// `y = (aa + cos(v/2) * sin(u) - sin(v/2) * sin(2u)) * sin(v)`
/// `z = sin(v/2) * sin(u) + cos(v/2) * sin(2u)`
///
/// `aa` is the radius of the central circle the figure-eight sweeps around;
/// the result is multiplied by `scale` after evaluation. Computation runs
/// in double precision and the final point is narrowed to `f32`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn evaluate(u: f32, v: f32, aa: f32, scale: f32) -> Point3 {
    let u = f64::from(u);
    let v = f64::from(v);
    let aa = f64::from(aa);
    let scale = f64::from(scale);

    let half_v = v / 2.0;
    let ring = aa + half_v.cos() * u.sin() - half_v.sin() * (2.0 * u).sin();
    let x = ring * v.cos();
    let y = ring * v.sin();
    let z = half_v.sin() * u.sin() + half_v.cos() * (2.0 * u).sin();

    Point3::new((x * scale) as f32, (y * scale) as f32, (z * scale) as f32)
}

/// Returns the natural domain of the Klein bottle: `u, v` in `(0, 2*pi)`,
/// `aa = 3`, display scale `0.5`.
#[must_use]
pub fn natural_domain() -> SurfaceDomain {
    SurfaceDomain::new(0.0, TAU, 0.0, TAU, 3.0, 0.5)
}
