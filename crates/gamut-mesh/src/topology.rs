//! Triangle topology for boundary surfaces.
//!
//! A [`Topology`] is a flat list of 3-index triangles into some vertex
//! array. The index bound is validated at construction; the winding
//! convention (positive enclosed volume, see the crate docs) is an
//! inherited precondition that cannot be checked per-triangle.

use crate::{MeshError, MeshResult};

/// A validated list of triangles indexing into a vertex array.
///
/// Construction checks every index against the vertex count it was built
/// for; a `Topology` can afterwards be applied to any vertex array of at
/// least that length (the intersection engine reuses the test topology
/// over a freshly clipped vertex array of identical length).
///
/// # Example
///
/// ```rust
/// use gamut_mesh::Topology;
///
/// let topo = Topology::new(vec![[0, 1, 2], [0, 2, 3]], 4).unwrap();
/// assert_eq!(topo.len(), 2);
/// assert!(Topology::new(vec![[0, 1, 9]], 4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    triangles: Vec<[u32; 3]>,
}

impl Topology {
    /// Creates a topology, validating every index against `vertex_count`.
    pub fn new(triangles: Vec<[u32; 3]>, vertex_count: usize) -> MeshResult<Self> {
        for (t, tri) in triangles.iter().enumerate() {
            for &index in tri {
                if index as usize >= vertex_count {
                    return Err(MeshError::InvalidTopology {
                        triangle: t,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(Self { triangles })
    }

    /// Number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The triangle index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Largest vertex index referenced, or `None` for an empty topology.
    pub fn max_index(&self) -> Option<u32> {
        self.triangles.iter().flatten().copied().max()
    }
}
