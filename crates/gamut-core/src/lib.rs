//! # gamut-core
//!
//! Building and comparing device color gamuts.
//!
//! A [`Gamut`] pairs canonical device-RGB grid points with measured (or
//! synthesized) XYZ tristimulus values and a boundary triangulation. It is
//! built one of two ways:
//!
//! - [`Gamut::from_measurements`] - from per-patch colorimeter rows
//!   ([`measurements`] parses the raw text format)
//! - [`Gamut::from_primaries`] - from an 8-primary descriptor plus a gamma
//!   exponent, via trilinear cube interpolation
//!
//! [`LabMesh::from_gamut`] turns a gamut into a [`BoundaryMesh`] in CIELAB
//! (BLA axis order) with its enclosed volume, and [`Session`] holds the
//! reference/test/intersection slots of a comparison.
//!
//! All construction is fail-fast: a gamut either builds completely or
//! returns an error, never a partial result.
//!
//! [`BoundaryMesh`]: gamut_mesh::BoundaryMesh

#![warn(missing_docs)]

mod error;
mod gamut;
mod index;
mod lab_mesh;
mod measure;
mod session;
mod synth;

pub use error::*;
pub use gamut::*;
pub use index::*;
pub use lab_mesh::*;
pub use measure::*;
pub use session::*;
pub use synth::*;
