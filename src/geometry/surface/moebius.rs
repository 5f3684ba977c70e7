use std::f32::consts::TAU;

use crate::math::Point3;

use super::SurfaceDomain;

/// Evaluates the Möbius strip at `(u, v)`.
///
/// `x = aa * (cos(v) + u * cos(v/2) * cos(v))`
/// `y = aa * (sin(v) + u * cos(v/2) * sin(v))`
/// `z = aa * u * sin(v/2)`
///
/// `v` runs around the strip, `u` across its width; `aa` sets the radius of
/// the centerline circle. The half-angle terms give the strip its single
/// half-twist over one revolution. The result is multiplied by `scale`
/// after evaluation; computation runs in double precision and the final
/// point is narrowed to `f32`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn evaluate(u: f32, v: f32, aa: f32, scale: f32) -> Point3 {
    let u = f64::from(u);
    let v = f64::from(v);
    let aa = f64::from(aa);
    let scale = f64::from(scale);

    let half_v = v / 2.0;
    let x = aa * (v.cos() + u * half_v.cos() * v.cos());
    let y = aa * (v.sin() + u * half_v.cos() * v.sin());
    let z = aa * u * half_v.sin();

    Point3::new((x * scale) as f32, (y * scale) as f32, (z * scale) as f32)
}

/// Returns the natural domain of the Möbius strip: `u` in `[-0.4, 0.4]`,
/// `v` in `[0, 2*pi)`, `aa = 3`, display scale `0.5`.
#[must_use]
pub fn natural_domain() -> SurfaceDomain {
    SurfaceDomain::new(-0.4, 0.4, 0.0, TAU, 3.0, 0.5)
}
