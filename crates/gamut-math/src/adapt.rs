//! Chromatic adaptation transforms.
//!
//! Gamut measurements arrive relative to whatever white the instrument saw.
//! Before two devices can be compared in CIELAB, both sample sets must be
//! adapted to a common reference white. This module provides the Bradford
//! transform used for that step.
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{adapt_matrix, BRADFORD, D65, D50};
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, D65, D50);
//! let result = d65_to_d50 * D65;
//! assert!((result.x - D50.x).abs() < 1e-3);
//! ```

use crate::{Mat3, Vec3};

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
///
/// The ICC profile connection white point; all gamut surfaces are
/// normalized to D50 before CIELAB conversion.
pub const D50: Vec3 = Vec3::new(0.9642957, 1.0, 0.8251046);

/// CIE Standard Illuminant D65 (daylight, ~6500K).
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a "sharpened" cone response space.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Inverse Bradford matrix.
pub const BRADFORD_INV: Mat3 = Mat3::from_rows([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Computes a chromatic adaptation matrix between two white points.
///
/// The resulting matrix transforms XYZ values from the source illuminant
/// to the destination illuminant using the von Kries scheme: transform to
/// cone space, scale each response by the white-point ratio, transform
/// back (`M⁻¹ · S · M`).
///
/// # Arguments
///
/// * `method` - The CAT matrix to use (normally [`BRADFORD`])
/// * `src_white` - Source white point in XYZ
/// * `dst_white` - Destination white point in XYZ
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = Mat3::diagonal(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );

    method_inv * scale * method
}

/// Adapts a sequence of tristimulus values from one white point to another.
///
/// Output has the same length and order as the input. Pure and
/// deterministic: the adaptation matrix is computed once and applied to
/// every sample.
pub fn adapt(xyz: &[Vec3], src_white: Vec3, dst_white: Vec3) -> Vec<Vec3> {
    let m = adapt_matrix(BRADFORD, src_white, dst_white);
    xyz.iter().map(|&v| m * v).collect()
}
