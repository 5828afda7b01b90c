//! CIELAB boundary mesh construction.
//!
//! Turns a [`Gamut`]'s tristimulus samples into a [`BoundaryMesh`] in
//! perceptual coordinates:
//!
//! 1. scale so the maximum-luminance sample maps to Y = 1 (relative
//!    colorimetry)
//! 2. Bradford-adapt from that sample's white to D50
//! 3. divide by D50 to white-normalize
//! 4. convert to CIELAB
//! 5. reorder axes to BLA `(b*, L*, a*)`
//!
//! The BLA reorder is the workspace-internal convention the intersection
//! engine's neutral anchor `(0, 50, 0)` depends on.

use gamut_math::{BRADFORD, D50, Vec3, adapt_matrix, xyz_to_lab};
use gamut_mesh::BoundaryMesh;

use crate::{Gamut, GamutResult};

/// A gamut boundary in CIELAB, with its volume and the raw device RGB of
/// each vertex (kept for display coloring).
///
/// Immutable; session slots replace whole `LabMesh` values.
#[derive(Debug, Clone)]
pub struct LabMesh {
    mesh: BoundaryMesh,
    volume: f64,
    rgb: Vec<[f64; 3]>,
}

impl LabMesh {
    /// Builds the CIELAB boundary mesh of a gamut.
    pub fn from_gamut(gamut: &Gamut) -> GamutResult<Self> {
        // Relative colorimetry: brightest measured sample becomes Y = 1
        // and doubles as the adaptation source white.
        let white = gamut
            .xyz()
            .iter()
            .copied()
            .fold(Vec3::new(0.0, f64::NEG_INFINITY, 0.0), |m, v| {
                if m.y >= v.y { m } else { v }
            });
        let scale = 1.0 / white.y;

        let to_d50 = adapt_matrix(BRADFORD, white * scale, D50);
        let bla: Vec<Vec3> = gamut
            .xyz()
            .iter()
            .map(|&xyz| {
                let lab = xyz_to_lab(to_d50 * (xyz * scale) / D50);
                Vec3::new(lab[2], lab[0], lab[1])
            })
            .collect();

        let mesh = BoundaryMesh::with_topology(bla, gamut.topology().clone())?;
        Ok(Self::from_boundary(mesh, gamut.rgb().to_vec()))
    }

    /// Wraps an already built boundary (used for intersection results).
    pub(crate) fn from_boundary(mesh: BoundaryMesh, rgb: Vec<[f64; 3]>) -> Self {
        let volume = mesh.volume();
        Self { mesh, volume, rgb }
    }

    /// The boundary surface in BLA coordinates.
    #[inline]
    pub fn mesh(&self) -> &BoundaryMesh {
        &self.mesh
    }

    /// Enclosed CIELAB volume, computed once at construction.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Device RGB per vertex, index-aligned with the mesh vertices.
    #[inline]
    pub fn rgb(&self) -> &[[f64; 3]] {
        &self.rgb
    }
}
