//! Canonical device-cube surface tessellation.
//!
//! A gamut boundary in device space is the surface of the RGB cube: every
//! point where at least one channel sits at the lowest or highest measured
//! grey level. Given the sorted distinct grey levels of a measurement set,
//! [`tessellate`] produces that surface as a deduplicated vertex grid plus
//! an outward-consistent triangulation.
//!
//! The output is a pure function of the input: the same grey set yields an
//! identical, index-stable tessellation on every call. Gamut construction
//! relies on this to pair tessellation vertices with measured tristimulus
//! values.

use std::collections::HashMap;

use crate::{MeshError, MeshResult, Topology};

/// A tessellated device-cube surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    /// Canonical device-RGB grid points on the cube surface.
    pub rgb: Vec<[f64; 3]>,
    /// Surface triangulation, outward-consistent winding.
    pub topology: Topology,
}

/// Tessellates the device-cube surface spanned by a grey-level set.
///
/// `grey` must hold at least 2 distinct values, sorted strictly ascending.
/// Each of the 6 cube faces becomes an N x N grid of grey-level
/// combinations (N = `grey.len()`); edge and corner vertices shared
/// between faces are emitted once, in deterministic first-seen order.
///
/// Triangles are wound so the enclosed volume integrates positive
/// (see crate docs).
///
/// # Example
///
/// ```rust
/// use gamut_mesh::tessellate;
///
/// let tess = tessellate(&[0.0, 128.0, 255.0]).unwrap();
/// // 6 faces of 3x3 grids, shared edges deduplicated
/// assert_eq!(tess.rgb.len(), 26);
/// assert_eq!(tess.topology.len(), 6 * 2 * 2 * 2);
/// ```
pub fn tessellate(grey: &[f64]) -> MeshResult<Tessellation> {
    if grey.len() < 2 {
        return Err(MeshError::DegenerateTessellation(grey.len()));
    }
    if !grey.windows(2).all(|w| w[0] < w[1]) {
        return Err(MeshError::UnsortedGreyLevels);
    }

    let n = grey.len();
    let lo = grey[0];
    let hi = grey[n - 1];

    let mut rgb: Vec<[f64; 3]> = Vec::new();
    let mut seen: HashMap<[u64; 3], u32> = HashMap::new();
    let mut triangles: Vec<[u32; 3]> = Vec::new();

    // Grey values repeat bit-identically across faces, so the dedup key can
    // be the raw f64 bit patterns.
    fn vertex_id(
        seen: &mut HashMap<[u64; 3], u32>,
        rgb: &mut Vec<[f64; 3]>,
        p: [f64; 3],
    ) -> u32 {
        let key = [p[0].to_bits(), p[1].to_bits(), p[2].to_bits()];
        *seen.entry(key).or_insert_with(|| {
            rgb.push(p);
            (rgb.len() - 1) as u32
        })
    }

    for axis in 0..3usize {
        // The two free axes of this face, in ascending index order, and the
        // sign of e_u x e_v relative to the face axis.
        let (u_axis, v_axis) = match axis {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        let uv_positive = axis != 1;

        for (level, is_hi) in [(lo, false), (hi, true)] {
            // Index grid for this face, row-major over (u, v).
            let mut grid = Vec::with_capacity(n * n);
            for i in 0..n {
                for j in 0..n {
                    let mut p = [0.0; 3];
                    p[axis] = level;
                    p[u_axis] = grey[i];
                    p[v_axis] = grey[j];
                    grid.push(vertex_id(&mut seen, &mut rgb, p));
                }
            }

            // Choose the diagonal split orientation so the face normal
            // points inward (positive volume under the signed-tetrahedron
            // sum).
            let flip = is_hi == uv_positive;
            for i in 0..n - 1 {
                for j in 0..n - 1 {
                    let p00 = grid[i * n + j];
                    let p10 = grid[(i + 1) * n + j];
                    let p01 = grid[i * n + j + 1];
                    let p11 = grid[(i + 1) * n + j + 1];
                    if flip {
                        triangles.push([p00, p11, p10]);
                        triangles.push([p00, p01, p11]);
                    } else {
                        triangles.push([p00, p10, p11]);
                        triangles.push([p00, p11, p01]);
                    }
                }
            }
        }
    }

    let vertex_count = rgb.len();
    Ok(Tessellation {
        rgb,
        topology: Topology::new(triangles, vertex_count)?,
    })
}
