//! Gamut synthesis from primary measurements.
//!
//! Reference standards are rarely measured patch-by-patch; instead a
//! descriptor supplies the 8 cube-corner primaries, a gamma exponent, and
//! the grey levels of the target tessellation. The synthesizer linearizes
//! each device coordinate through the gamma curve and trilinearly blends
//! the corner tristimulus values for every canonical grid point.
//!
//! The gamma nonlinearity is applied *before* interpolation, not after -
//! that ordering is the defining contract of the synthesis and must not
//! be rearranged.

use gamut_math::Vec3;
use gamut_mesh::tessellate;
use serde::Deserialize;

use crate::{Gamut, GamutError, GamutResult};

/// Cube corner names in classification order (R bit, G bit, B bit).
const CORNER_NAMES: [&str; 8] = ["K", "B", "G", "C", "R", "M", "Y", "W"];

/// A reference-standard descriptor: 8 corner primaries, gamma, grey set.
///
/// The JSON shape mirrors the measurement records:
///
/// ```json
/// {
///   "GS": [0, 17, 34, ...],
///   "gamma": 2.4,
///   "primaries": [[Rdev, Gdev, Bdev, X, Y, Z], ...]
/// }
/// ```
///
/// Each primary must sit exactly on a corner of the grey-level cube:
/// every device channel at the minimum or maximum grey level. Corners are
/// identified by that min/max pattern, so record order does not matter.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimariesDescriptor {
    /// The 8 corner records `[Rdev, Gdev, Bdev, X, Y, Z]`.
    pub primaries: Vec<[f64; 6]>,
    /// Gamma exponent applied to normalized device values.
    pub gamma: f64,
    /// Device grey levels of the target tessellation.
    #[serde(rename = "GS")]
    pub grey_levels: Vec<f64>,
}

impl PrimariesDescriptor {
    /// Parses a descriptor from JSON text.
    pub fn from_json(text: &str) -> GamutResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The bundled Rec.2020 reference descriptor.
    pub fn rec2020() -> GamutResult<Self> {
        Self::from_json(include_str!("../data/rec2020.json"))
    }
}

/// Classifies the 8 primaries to cube corners by their device-axis
/// min/max pattern.
///
/// Returns the corner tristimulus values indexed by corner code
/// `r_hi*4 + g_hi*2 + b_hi` (K, B, G, C, R, M, Y, W).
fn classify_primaries(
    primaries: &[[f64; 6]],
    min: f64,
    max: f64,
) -> GamutResult<[Vec3; 8]> {
    if primaries.len() != 8 {
        return Err(GamutError::WrongPrimaryCount(primaries.len()));
    }

    let mut corners: [Option<Vec3>; 8] = [None; 8];
    for (index, p) in primaries.iter().enumerate() {
        let mut code = 0usize;
        for (axis, &v) in p[..3].iter().enumerate() {
            if v == max {
                code |= 4 >> axis;
            } else if v != min {
                return Err(GamutError::OffCornerPrimary {
                    index,
                    rgb: [p[0], p[1], p[2]],
                });
            }
        }
        let slot = &mut corners[code];
        if slot.is_some() {
            return Err(GamutError::DuplicateCorner(CORNER_NAMES[code]));
        }
        *slot = Some(Vec3::new(p[3], p[4], p[5]));
    }

    let mut result = [Vec3::ZERO; 8];
    for (code, slot) in corners.into_iter().enumerate() {
        result[code] = slot.ok_or(GamutError::MissingCorner(CORNER_NAMES[code]))?;
    }
    Ok(result)
}

impl Gamut {
    /// Synthesizes a gamut from a primaries descriptor.
    ///
    /// For each canonical grid RGB the device coordinates are linearized
    /// with `lin(v) = ((v - min)/(max - min))^gamma` and the 8 corner
    /// tristimulus values are blended trilinearly: the 4 R-axis corner
    /// pairs by `lr`, the 2 results by `lg`, the final pair by `lb`.
    /// Output shape is identical to [`Gamut::from_measurements`].
    pub fn from_primaries(
        desc: &PrimariesDescriptor,
        name: impl Into<String>,
    ) -> GamutResult<Self> {
        let mut grey = desc.grey_levels.clone();
        grey.sort_by(f64::total_cmp);
        grey.dedup();

        let tess = tessellate(&grey)?;
        let min = grey[0];
        let max = grey[grey.len() - 1];
        let corners = classify_primaries(&desc.primaries, min, max)?;

        let lin = |v: f64| ((v - min) / (max - min)).powf(desc.gamma);

        let xyz: Vec<Vec3> = tess
            .rgb
            .iter()
            .map(|&[r, g, b]| {
                let (lr, lg, lb) = (lin(r), lin(g), lin(b));
                let mut pr = [Vec3::ZERO; 6];
                for n in 0..4 {
                    pr[n] = corners[n].lerp(corners[n + 4], lr);
                }
                for n in 0..2 {
                    pr[4 + n] = pr[n].lerp(pr[n + 2], lg);
                }
                pr[4].lerp(pr[5], lb)
            })
            .collect();

        Ok(Gamut::from_parts(name.into(), tess.rgb, xyz, tess.topology))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Identity primaries: tristimulus equals the unit-cube corner RGB.
    fn identity_descriptor(gamma: f64, grey_levels: Vec<f64>) -> PrimariesDescriptor {
        let mut primaries = Vec::new();
        for r in [0.0, 1.0] {
            for g in [0.0, 1.0] {
                for b in [0.0, 1.0] {
                    primaries.push([r, g, b, r, g, b]);
                }
            }
        }
        PrimariesDescriptor {
            primaries,
            gamma,
            grey_levels,
        }
    }

    #[test]
    fn test_identity_primaries_gamma_one() {
        // With gamma = 1 and identity corners the interpolation must
        // reproduce the linearized grid exactly.
        let desc = identity_descriptor(1.0, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let gamut = Gamut::from_primaries(&desc, "identity").unwrap();
        for (rgb, xyz) in gamut.rgb().iter().zip(gamut.xyz()) {
            assert_eq!(Vec3::from_array(*rgb), *xyz);
        }
    }

    #[test]
    fn test_gamma_applied_before_interpolation() {
        let desc = identity_descriptor(2.0, vec![0.0, 0.5, 1.0]);
        let gamut = Gamut::from_primaries(&desc, "g2").unwrap();
        // Surface point (1, 0.5, 0): G channel linearizes to 0.25 first,
        // then interpolates identity corners.
        let i = gamut
            .rgb()
            .iter()
            .position(|&p| p == [1.0, 0.5, 0.0])
            .unwrap();
        let xyz = gamut.xyz()[i];
        assert_relative_eq!(xyz.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(xyz.y, 0.25, epsilon = 1e-12);
        assert_relative_eq!(xyz.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_record_order_irrelevant() {
        let mut desc = identity_descriptor(1.0, vec![0.0, 1.0]);
        desc.primaries.reverse();
        let gamut = Gamut::from_primaries(&desc, "reversed").unwrap();
        for (rgb, xyz) in gamut.rgb().iter().zip(gamut.xyz()) {
            assert_eq!(Vec3::from_array(*rgb), *xyz);
        }
    }

    #[test]
    fn test_off_corner_primary_rejected() {
        let mut desc = identity_descriptor(1.0, vec![0.0, 1.0]);
        desc.primaries[3][1] = 0.5;
        let err = Gamut::from_primaries(&desc, "bad").unwrap_err();
        assert!(matches!(err, GamutError::OffCornerPrimary { index: 3, .. }));
    }

    #[test]
    fn test_duplicate_corner_rejected() {
        let mut desc = identity_descriptor(1.0, vec![0.0, 1.0]);
        desc.primaries[1] = desc.primaries[0];
        let err = Gamut::from_primaries(&desc, "dup").unwrap_err();
        assert!(matches!(err, GamutError::DuplicateCorner("K")));
    }

    #[test]
    fn test_wrong_count_rejected() {
        let mut desc = identity_descriptor(1.0, vec![0.0, 1.0]);
        desc.primaries.pop();
        let err = Gamut::from_primaries(&desc, "seven").unwrap_err();
        assert!(matches!(err, GamutError::WrongPrimaryCount(7)));
    }

    #[test]
    fn test_bundled_rec2020_descriptor() {
        let desc = PrimariesDescriptor::rec2020().unwrap();
        let gamut = Gamut::from_primaries(&desc, "rec2020").unwrap();
        assert!(!gamut.rgb().is_empty());
        // White corner synthesizes to the descriptor's white tristimulus
        let w = gamut
            .rgb()
            .iter()
            .position(|&p| p == [255.0, 255.0, 255.0])
            .unwrap();
        let xyz = gamut.xyz()[w];
        assert_relative_eq!(xyz.y, 1.0, epsilon = 1e-9);
    }
}
