//! Enclosed-volume integration for triangulated surfaces.

use gamut_math::Vec3;

use crate::Topology;

/// Integrates the volume enclosed by a triangulated surface.
///
/// Sums the signed tetrahedron spanned by each triangle and the coordinate
/// origin:
///
/// ```text
/// vol += a . ((b - c) x (a - b)) / 6
/// ```
///
/// By the divergence theorem this is the enclosed volume for a closed
/// surface with consistent winding, independent of where the origin lies.
/// Requires the crate's winding convention for a positive result;
/// degenerate zero-area triangles contribute ~0 and are harmless.
///
/// Topology indices must be valid for `vertices` (guaranteed when the
/// topology was constructed against it).
pub fn enclosed_volume(vertices: &[Vec3], topology: &Topology) -> f64 {
    let mut vol = 0.0;
    for &[i0, i1, i2] in topology.triangles() {
        let a = vertices[i0 as usize];
        let b = vertices[i1 as usize];
        let c = vertices[i2 as usize];
        vol += a.dot((b - c).cross(a - b)) / 6.0;
    }
    vol
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tessellate;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_cube_volume() {
        let tess = tessellate(&[0.0, 1.0]).unwrap();
        let vertices: Vec<Vec3> = tess.rgb.iter().map(|&p| Vec3::from_array(p)).collect();
        assert_relative_eq!(
            enclosed_volume(&vertices, &tess.topology),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_volume_independent_of_grid_resolution() {
        for n in 2..6usize {
            let grey: Vec<f64> = (0..n).map(|i| 2.0 * i as f64 / (n - 1) as f64).collect();
            let tess = tessellate(&grey).unwrap();
            let vertices: Vec<Vec3> = tess.rgb.iter().map(|&p| Vec3::from_array(p)).collect();
            assert_relative_eq!(
                enclosed_volume(&vertices, &tess.topology),
                8.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_volume_independent_of_origin_offset() {
        // Divergence theorem: translating a closed surface leaves the
        // integral unchanged even though every tetrahedron changes.
        let tess = tessellate(&[5.0, 6.0]).unwrap();
        let vertices: Vec<Vec3> = tess.rgb.iter().map(|&p| Vec3::from_array(p)).collect();
        assert_relative_eq!(
            enclosed_volume(&vertices, &tess.topology),
            1.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_degenerate_triangle_contributes_nothing() {
        let vertices = vec![
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(4.0, 5.0, 6.0),
        ];
        let topo = Topology::new(vec![[0, 1, 2]], 3).unwrap();
        assert_relative_eq!(enclosed_volume(&vertices, &topo), 0.0, epsilon = 1e-12);
    }
}
