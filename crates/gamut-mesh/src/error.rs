//! Mesh error types.

use thiserror::Error;

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while building or intersecting boundary meshes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A triangle references a vertex index outside the vertex array.
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    InvalidTopology {
        /// Position of the offending triangle in the topology.
        triangle: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Too few distinct grey levels to tessellate a cube surface.
    #[error("tessellation needs at least 2 distinct grey levels, got {0}")]
    DegenerateTessellation(usize),

    /// Grey levels were not strictly ascending.
    #[error("grey levels must be sorted strictly ascending")]
    UnsortedGreyLevels,

    /// A ray from the neutral anchor found no triangle on the reference
    /// surface. The reference mesh does not enclose the anchor.
    #[error("no reference-surface hit for test vertex {vertex}; reference mesh is not closed around the anchor")]
    UndefinedIntersection {
        /// Index of the test vertex whose ray missed every triangle.
        vertex: usize,
    },
}
