//! Immutable gamut boundary surfaces in perceptual coordinates.

use gamut_math::Vec3;

use crate::{MeshResult, Topology, enclosed_volume};

/// A triangulated gamut boundary in perceptual coordinates.
///
/// Vertices are stored in BLA order `(b*, L*, a*)` - the convention every
/// consumer in this workspace relies on, most importantly the intersection
/// engine whose neutral anchor is the BLA point `(0, 50, 0)`.
///
/// Immutable once built: selection changes replace whole meshes, never
/// edit them.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryMesh {
    vertices: Vec<Vec3>,
    topology: Topology,
}

impl BoundaryMesh {
    /// Creates a boundary mesh, validating the topology against the
    /// vertex array.
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> MeshResult<Self> {
        let topology = Topology::new(triangles, vertices.len())?;
        Ok(Self { vertices, topology })
    }

    /// Creates a boundary mesh from an already validated topology.
    ///
    /// Re-checks the index bound, since the topology may have been
    /// validated against a different vertex array.
    pub fn with_topology(vertices: Vec<Vec3>, topology: Topology) -> MeshResult<Self> {
        let triangles = topology.triangles().to_vec();
        Self::new(vertices, triangles)
    }

    /// Vertex positions in BLA order.
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// The triangle topology.
    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Integrates the enclosed volume (see [`enclosed_volume`]).
    pub fn volume(&self) -> f64 {
        enclosed_volume(&self.vertices, &self.topology)
    }
}
