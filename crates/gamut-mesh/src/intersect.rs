//! Ray-cast intersection of two gamut boundaries.
//!
//! Given a *reference* boundary and a *test* boundary, produce a mesh with
//! the test topology where every test vertex that lies outside the
//! reference surface is pulled back onto it along the ray from the neutral
//! anchor, and every vertex inside is kept as-is. The result approximates
//! the part of the test gamut also covered by the reference gamut.
//!
//! # Algorithm
//!
//! For every reference triangle the Moller-Trumbore edge products are
//! precomputed once (`e2 x e1`, `e2 x o`, `o x e1`, `e2 . (o x e1)` with
//! `o` the anchor relative to `v0`), then reused for every test ray: setup is
//! O(T_ref) and the full scan O(V_test * T_ref). Each test vertex scans
//! the reference triangles in enumeration order and takes the **first**
//! accepted hit. For a non-convex reference surface a ray can cross the
//! boundary more than once and the first hit is not necessarily the
//! nearest; the result then depends on triangle enumeration order. Gamut
//! boundaries are star-shaped around the anchor in practice, where the
//! two notions coincide.
//!
//! Barycentric acceptance is tolerant by [`SEAM_EPSILON`] so rays grazing
//! an edge shared by two triangles cannot fall through the seam.

use gamut_math::Vec3;
use rayon::prelude::*;

use crate::{BoundaryMesh, MeshError, MeshResult};

/// The ray origin for all intersection queries: neutral mid-grey at BLA
/// `(b*, L*, a*) = (0, 50, 0)`.
pub const NEUTRAL_ANCHOR: Vec3 = Vec3::new(0.0, 50.0, 0.0);

/// Barycentric / distance tolerance for accepting a triangle hit.
pub const SEAM_EPSILON: f64 = 1e-4;

/// Precomputed Moller-Trumbore products for one reference triangle.
///
/// Everything here depends only on the triangle and the anchor, not on the
/// ray direction, so the whole table is built once per intersection call.
#[derive(Debug, Clone, Copy)]
struct TriangleBasis {
    /// `e2 x e1`
    e2e1: Vec3,
    /// `e2 x o`
    e2o: Vec3,
    /// `o x e1`
    oe1: Vec3,
    /// `e2 . (o x e1)`
    e2oe1: f64,
}

impl TriangleBasis {
    fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let e1 = v1 - v0;
        let e2 = v2 - v0;
        let o = NEUTRAL_ANCHOR - v0;
        let oe1 = o.cross(e1);
        Self {
            e2e1: e2.cross(e1),
            e2o: e2.cross(o),
            oe1,
            e2oe1: e2.dot(oe1),
        }
    }

    /// Distance along `dir` (unit, from the anchor) to this triangle's
    /// plane-and-bounds hit, or `None` if the ray misses.
    fn hit(&self, dir: Vec3) -> Option<f64> {
        let idet = 1.0 / dir.dot(self.e2e1);
        let d = self.e2oe1 * idet;
        if d >= 0.0 {
            let u = dir.dot(self.e2o) * idet;
            if u >= -SEAM_EPSILON {
                let v = dir.dot(self.oe1) * idet;
                if v >= -SEAM_EPSILON && u + v <= 1.0 + SEAM_EPSILON {
                    return Some(d);
                }
            }
        }
        None
    }
}

/// Clips the test boundary against the reference boundary.
///
/// Returns a new mesh carrying the test topology (copied unchanged) over a
/// clipped vertex array: vertices inside the reference surface are
/// untouched, vertices outside move to the point where their anchor ray
/// crosses the reference surface.
///
/// # Errors
///
/// [`MeshError::UndefinedIntersection`] if some test vertex's ray hits no
/// reference triangle at all. That only happens when the reference mesh
/// fails to enclose the anchor (malformed or non-closed surface); the
/// inputs are left untouched and remain usable.
///
/// # Determinism
///
/// Pure function of its inputs. The per-vertex scan fans out over rayon
/// but each vertex's triangle scan is sequential and order-stable, so
/// repeated calls give bit-identical results.
pub fn intersect(reference: &BoundaryMesh, test: &BoundaryMesh) -> MeshResult<BoundaryMesh> {
    let ref_vertices = reference.vertices();
    let basis: Vec<TriangleBasis> = reference
        .topology()
        .triangles()
        .iter()
        .map(|&[i0, i1, i2]| {
            TriangleBasis::new(
                ref_vertices[i0 as usize],
                ref_vertices[i1 as usize],
                ref_vertices[i2 as usize],
            )
        })
        .collect();

    let clipped: MeshResult<Vec<Vec3>> = test
        .vertices()
        .par_iter()
        .enumerate()
        .map(|(vertex, &p)| {
            let ray = p - NEUTRAL_ANCHOR;
            let l = ray.length();
            let dir = ray.normalize();
            for tri in &basis {
                if let Some(d) = tri.hit(dir) {
                    // Hit beyond the vertex itself: the vertex is inside
                    // the reference volume and stays. Otherwise it lands
                    // on the reference surface.
                    return Ok(if d > l * (1.0 + SEAM_EPSILON) {
                        p
                    } else {
                        NEUTRAL_ANCHOR + dir * d
                    });
                }
            }
            Err(MeshError::UndefinedIntersection { vertex })
        })
        .collect();

    BoundaryMesh::with_topology(clipped?, test.topology().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Octahedron centered on the anchor, scaled by `r`, crate winding.
    fn anchor_octahedron(r: f64) -> BoundaryMesh {
        let offsets = [
            Vec3::new(r, 0.0, 0.0),
            Vec3::new(-r, 0.0, 0.0),
            Vec3::new(0.0, r, 0.0),
            Vec3::new(0.0, -r, 0.0),
            Vec3::new(0.0, 0.0, r),
            Vec3::new(0.0, 0.0, -r),
        ];
        let vertices = offsets.iter().map(|&o| NEUTRAL_ANCHOR + o).collect();
        let triangles = vec![
            [0, 4, 2],
            [4, 1, 2],
            [1, 5, 2],
            [5, 0, 2],
            [4, 0, 3],
            [1, 4, 3],
            [5, 1, 3],
            [0, 5, 3],
        ];
        BoundaryMesh::new(vertices, triangles).unwrap()
    }

    #[test]
    fn test_inner_test_mesh_unchanged() {
        let reference = anchor_octahedron(10.0);
        let test = anchor_octahedron(2.0);
        let result = intersect(&reference, &test).unwrap();
        assert_eq!(result.vertices(), test.vertices());
        assert_eq!(result.topology(), test.topology());
    }

    #[test]
    fn test_outer_test_mesh_clipped_to_reference_surface() {
        let reference = anchor_octahedron(2.0);
        let test = anchor_octahedron(10.0);
        let result = intersect(&reference, &test).unwrap();

        // Every clipped vertex must satisfy the reference octahedron's
        // surface equation |x| + |y| + |z| = r (anchor-relative).
        for &v in result.vertices() {
            let d = (v - NEUTRAL_ANCHOR).abs();
            assert_relative_eq!(d.x + d.y + d.z, 2.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_clipped_volume_matches_reference() {
        let reference = anchor_octahedron(2.0);
        let test = anchor_octahedron(10.0);
        let result = intersect(&reference, &test).unwrap();
        // Test octahedron vertices land exactly on the reference apexes,
        // so the clipped mesh is the reference octahedron itself.
        assert_relative_eq!(result.volume(), reference.volume(), max_relative = 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let reference = anchor_octahedron(3.0);
        let test = anchor_octahedron(5.0);
        let a = intersect(&reference, &test).unwrap();
        let b = intersect(&reference, &test).unwrap();
        assert_eq!(a.vertices(), b.vertices());
    }

    #[test]
    fn test_open_reference_is_undefined() {
        let reference = anchor_octahedron(2.0);
        // Keep only one face: almost every anchor ray escapes unhit.
        let tris = reference.topology().triangles()[..1].to_vec();
        let open = BoundaryMesh::new(reference.vertices().to_vec(), tris).unwrap();

        let test = anchor_octahedron(5.0);
        let err = intersect(&open, &test).unwrap_err();
        assert!(matches!(err, MeshError::UndefinedIntersection { .. }));
    }

    #[test]
    fn test_partial_overlap_mixed_vertices() {
        // Shift the test mesh so some vertices poke out of the reference.
        let reference = anchor_octahedron(4.0);
        let shifted: Vec<Vec3> = anchor_octahedron(3.0)
            .vertices()
            .iter()
            .map(|&v| v + Vec3::new(2.0, 0.0, 0.0))
            .collect();
        let test = BoundaryMesh::new(
            shifted,
            anchor_octahedron(3.0).topology().triangles().to_vec(),
        )
        .unwrap();

        let result = intersect(&reference, &test).unwrap();

        // The -x apex lands at anchor + (-1,0,0), inside the reference,
        // and must be untouched. The +x apex at anchor + (5,0,0) is
        // outside and must land on the reference surface.
        let inside = test.vertices()[1]; // anchor + (-1, 0, 0)
        assert_eq!(result.vertices()[1], inside);

        let clipped = result.vertices()[0] - NEUTRAL_ANCHOR;
        let d = clipped.abs();
        assert_relative_eq!(d.x + d.y + d.z, 4.0, epsilon = 1e-4);
    }
}
