pub mod klein;
pub mod moebius;

use crate::math::Point3;

/// Signature of a caller-supplied position function.
///
/// Arguments are `(u, v, shape, scale)`; the result is the evaluated 3D
/// point with the scale already applied.
pub type CustomPositionFn = fn(f32, f32, f32, f32) -> Point3;

/// Parameter domain for a parametric surface.
///
/// Carries the rectangular `(u, v)` region together with the family shape
/// constant and the uniform scale applied after evaluation. Immutable once
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the U parameter range.
    pub u_min: f32,
    /// End of the U parameter range.
    pub u_max: f32,
    /// Start of the V parameter range.
    pub v_min: f32,
    /// End of the V parameter range.
    pub v_max: f32,
    /// Family shape constant (the `aa` coefficient in the Klein bottle and
    /// Möbius strip formulas).
    pub shape: f32,
    /// Uniform scale applied to evaluated points.
    pub scale: f32,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(u_min: f32, u_max: f32, v_min: f32, v_max: f32, shape: f32, scale: f32) -> Self {
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
            shape,
            scale,
        }
    }
}

/// A position function mapping `(u, v)` parameters to a 3D point.
///
/// Stateless and deterministic; evaluated independently at each grid
/// sample. The named variants cover the built-in surface families;
/// `Custom` accepts any function with the same signature. No validation or
/// clamping of `u`, `v` happens here; callers sample within the domain
/// they chose. No `PartialEq`: comparing the `Custom` fn pointer would be
/// unreliable across codegen units.
#[derive(Debug, Clone, Copy)]
pub enum PositionFn {
    /// Figure-eight Klein bottle immersion ([`klein::evaluate`]).
    KleinBottle,
    /// Möbius strip ([`moebius::evaluate`]).
    MoebiusStrip,
    /// Caller-supplied function.
    Custom(CustomPositionFn),
}

impl PositionFn {
    /// Evaluates the position function at `(u, v)`.
    ///
    /// `shape` is the family shape constant and `scale` the uniform
    /// post-evaluation factor, both forwarded unchanged.
    #[must_use]
    pub fn evaluate(&self, u: f32, v: f32, shape: f32, scale: f32) -> Point3 {
        match self {
            Self::KleinBottle => klein::evaluate(u, v, shape, scale),
            Self::MoebiusStrip => moebius::evaluate(u, v, shape, scale),
            Self::Custom(f) => f(u, v, shape, scale),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn named_variants_dispatch_to_family_functions() {
        let (u, v) = (1.3, 4.1);
        assert_eq!(
            PositionFn::KleinBottle.evaluate(u, v, 3.0, 0.5),
            klein::evaluate(u, v, 3.0, 0.5)
        );
        assert_eq!(
            PositionFn::MoebiusStrip.evaluate(u, v, 3.0, 0.5),
            moebius::evaluate(u, v, 3.0, 0.5)
        );
    }

    #[test]
    fn custom_variant_calls_supplied_function() {
        fn flat(u: f32, v: f32, _shape: f32, scale: f32) -> Point3 {
            Point3::new(u * scale, v * scale, 0.0)
        }
        let f = PositionFn::Custom(flat);
        assert_eq!(f.evaluate(2.0, 3.0, 0.0, 0.5), Point3::new(1.0, 1.5, 0.0));
    }

    #[test]
    fn domain_stores_bounds_and_factors() {
        let d = SurfaceDomain::new(0.0, 1.0, -2.0, 2.0, 3.0, 0.5);
        assert_eq!(
            d,
            SurfaceDomain {
                u_min: 0.0,
                u_max: 1.0,
                v_min: -2.0,
                v_max: 2.0,
                shape: 3.0,
                scale: 0.5,
            }
        );
    }
}
