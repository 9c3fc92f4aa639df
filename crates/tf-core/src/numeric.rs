use crate::TfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Loose closeness used when comparing tabulated values against each other
    /// (same magnitudes as numpy's `isclose` defaults).
    pub const TABULATED: Self = Self::new(1e-8, 1e-5);

    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }

    /// Purely absolute tolerance.
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, TfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(TfError::NonFinite { what, value: v })
    }
}

/// Clamp into the closed unit interval. NaN stays NaN.
#[inline]
pub fn clamp_unit(v: Real) -> Real {
    v.clamp(0.0, 1.0)
}

/// Linear blend `a + w * (b - a)`.
#[inline]
pub fn lerp(a: Real, b: Real, w: Real) -> Real {
    a + w * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn absolute_tolerance_ignores_magnitude() {
        let tol = Tolerances::absolute(1e-3);
        assert!(nearly_equal(151.8305, 151.8310, tol));
        assert!(!nearly_equal(1.0e6, 1.0e6 + 0.01, tol));
    }

    #[test]
    fn tabulated_tolerance_is_relative() {
        assert!(nearly_equal(2675.6, 2675.6 + 1e-3, Tolerances::TABULATED));
        assert!(!nearly_equal(419.17, 2675.6, Tolerances::TABULATED));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(1.0000001), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }
}
