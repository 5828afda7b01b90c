//! # gamut-math
//!
//! Math primitives for color gamut analysis.
//!
//! This crate provides the numerical foundation for building and comparing
//! gamut boundary surfaces:
//!
//! - [`Vec3`] - f64 3D vectors for XYZ / Lab / device-RGB triplets
//! - [`Mat3`] - f64 3x3 matrices for linear color transforms
//! - Chromatic adaptation transforms (Bradford)
//! - CIELAB conversion for white-normalized tristimulus values
//!
//! # Design
//!
//! All types use `f64`: gamut volumes are integrated over hundreds of
//! signed tetrahedra and the intersection scan divides by small
//! determinants, so single precision is not enough headroom.
//!
//! Matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use gamut_math::{adapt_matrix, xyz_to_lab, BRADFORD, D50, Vec3};
//!
//! let white = Vec3::new(0.9505, 1.0, 1.0891);
//! let to_d50 = adapt_matrix(BRADFORD, white, D50);
//! let adapted = to_d50 * white;
//!
//! let lab = xyz_to_lab(adapted / D50);
//! assert!((lab[0] - 100.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]

mod adapt;
mod lab;
mod mat3;
mod vec3;

pub use adapt::*;
pub use lab::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export glam f64 types for direct use
pub mod glam {
    pub use ::glam::{DMat3 as GlamMat3, DVec3 as GlamVec3};
}
