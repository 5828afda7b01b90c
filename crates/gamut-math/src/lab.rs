//! CIE 1976 L*a*b* conversion.
//!
//! Converts white-normalized tristimulus values (white ≈ 1 on every axis)
//! into the perceptual CIELAB space in which gamut boundaries are
//! triangulated and compared.
//!
//! Callers divide by the reference white *before* calling in here; the
//! conversion itself never sees a white point.

use crate::Vec3;

// CIE 1976 constants: epsilon = (6/29)^3, kappa = (29/3)^3.
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// The CIELAB component transfer function.
///
/// Cube root above the linearity threshold, linear segment below.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Converts a white-normalized tristimulus value to `(L*, a*, b*)`.
///
/// Input components are ratios `X/Xn, Y/Yn, Z/Zn`; the nominal white maps
/// to `(100, 0, 0)`.
///
/// # Example
///
/// ```rust
/// use gamut_math::{xyz_to_lab, Vec3};
///
/// let lab = xyz_to_lab(Vec3::ONE);
/// assert!((lab[0] - 100.0).abs() < 1e-9);
/// assert!(lab[1].abs() < 1e-9);
/// assert!(lab[2].abs() < 1e-9);
/// ```
#[inline]
pub fn xyz_to_lab(xyz: Vec3) -> [f64; 3] {
    let fx = lab_f(xyz.x);
    let fy = lab_f(xyz.y);
    let fz = lab_f(xyz.z);

    [
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Converts a slice of white-normalized tristimulus values to CIELAB.
///
/// Same length and order as the input.
pub fn xyz_slice_to_lab(xyz: &[Vec3]) -> Vec<[f64; 3]> {
    xyz.iter().map(|&v| xyz_to_lab(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_white_maps_to_l100() {
        let lab = xyz_to_lab(Vec3::ONE);
        assert_relative_eq!(lab[0], 100.0, max_relative = 1e-12);
        assert_relative_eq!(lab[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(lab[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_black_maps_to_l0() {
        let lab = xyz_to_lab(Vec3::ZERO);
        assert_relative_eq!(lab[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mid_grey() {
        // Y = 0.18 is about L* = 49.5 for a neutral sample
        let lab = xyz_to_lab(Vec3::splat(0.18));
        assert_relative_eq!(lab[0], 49.496, epsilon = 1e-2);
        assert_relative_eq!(lab[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(lab[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_segment_continuous() {
        // lab_f must be continuous at the threshold
        let below = xyz_to_lab(Vec3::splat(EPSILON - 1e-12));
        let above = xyz_to_lab(Vec3::splat(EPSILON + 1e-12));
        assert!((below[0] - above[0]).abs() < 1e-6);
    }

    #[test]
    fn test_slice_conversion_matches_scalar() {
        let xyz = vec![Vec3::splat(0.5), Vec3::new(0.4, 0.2, 0.9)];
        let labs = xyz_slice_to_lab(&xyz);
        assert_eq!(labs.len(), 2);
        for (v, lab) in xyz.iter().zip(&labs) {
            assert_eq!(*lab, xyz_to_lab(*v));
        }
    }
}
