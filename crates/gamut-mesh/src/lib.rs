//! # gamut-mesh
//!
//! Triangulated gamut boundary surfaces and the geometry that runs on them.
//!
//! This crate provides:
//!
//! - [`Topology`] - validated triangle index lists with an outward-consistent
//!   winding convention
//! - [`tessellate`] - the canonical device-cube surface tessellation for a
//!   set of grey levels
//! - [`BoundaryMesh`] - an immutable triangulated surface in perceptual
//!   coordinates, with enclosed-volume integration
//! - [`intersect`] - ray-cast clipping of one boundary against another from
//!   the shared neutral anchor
//!
//! # Winding convention
//!
//! Every triangle list produced or consumed here is wound so that
//! [`BoundaryMesh::volume`] integrates to a *positive* value for a closed
//! surface (faces appear clockwise when viewed from outside). The
//! tessellation generator establishes this; meshes built from external
//! topology inherit it as a precondition.

#![warn(missing_docs)]

mod boundary;
mod error;
mod intersect;
mod tessellation;
mod topology;
mod volume;

pub use boundary::*;
pub use error::*;
pub use intersect::*;
pub use tessellation::*;
pub use topology::*;
pub use volume::*;
