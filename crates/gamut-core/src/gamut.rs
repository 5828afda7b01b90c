//! The gamut data set: aligned device RGB, tristimulus, and topology.

use gamut_math::Vec3;
use gamut_mesh::{Topology, tessellate};

use crate::{GamutError, GamutResult, Measurement, SampleIndex, grey_levels};

/// A device gamut: canonical device-RGB grid, index-aligned tristimulus
/// values, and the boundary triangulation over them.
///
/// Immutable after construction; a comparison session swaps whole `Gamut`
/// values, never edits one. Construction is fail-fast: if any canonical
/// RGB the tessellation requires has no tristimulus value, the whole
/// build fails and nothing partial escapes.
#[derive(Debug, Clone)]
pub struct Gamut {
    name: String,
    rgb: Vec<[f64; 3]>,
    xyz: Vec<Vec3>,
    topology: Topology,
}

impl Gamut {
    /// Builds a gamut from measured rows.
    ///
    /// Tessellates the sorted distinct grey set of the samples, then
    /// resolves every canonical RGB through the sample index.
    ///
    /// # Errors
    ///
    /// [`GamutError::MissingSamples`] listing every canonical RGB the
    /// measurement set lacks; mesh errors if fewer than two grey levels
    /// were measured.
    pub fn from_measurements<I>(samples: I, name: impl Into<String>) -> GamutResult<Self>
    where
        I: IntoIterator<Item = Measurement>,
    {
        let samples: Vec<Measurement> = samples.into_iter().collect();
        let grey = grey_levels(&samples);
        let tess = tessellate(&grey)?;
        let index = SampleIndex::build(&samples);

        let mut xyz = Vec::with_capacity(tess.rgb.len());
        let mut missing = Vec::new();
        for &rgb in &tess.rgb {
            match index.get(rgb) {
                Some(v) => xyz.push(v),
                None => missing.push(rgb),
            }
        }
        if !missing.is_empty() {
            return Err(GamutError::MissingSamples(missing));
        }

        Ok(Self {
            name: name.into(),
            rgb: tess.rgb,
            xyz,
            topology: tess.topology,
        })
    }

    /// Internal constructor for the synthesizer, which produces already
    /// aligned arrays.
    pub(crate) fn from_parts(
        name: String,
        rgb: Vec<[f64; 3]>,
        xyz: Vec<Vec3>,
        topology: Topology,
    ) -> Self {
        debug_assert_eq!(rgb.len(), xyz.len());
        Self {
            name,
            rgb,
            xyz,
            topology,
        }
    }

    /// Display name of the data set.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical device-RGB grid points.
    #[inline]
    pub fn rgb(&self) -> &[[f64; 3]] {
        &self.rgb
    }

    /// Tristimulus values, index-aligned with [`Self::rgb`].
    #[inline]
    pub fn xyz(&self) -> &[Vec3] {
        &self.xyz
    }

    /// Boundary triangulation over the grid points.
    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements;

    /// Full 2-level measurement set: the 8 cube corners.
    fn corner_text() -> String {
        let mut text = String::new();
        for r in [0, 255] {
            for g in [0, 255] {
                for b in [0, 255] {
                    let (x, y, z) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
                    text.push_str(&format!("1 {r} {g} {b} {x} {y} {z}\n"));
                }
            }
        }
        text
    }

    #[test]
    fn test_complete_set_builds() {
        let text = corner_text();
        let gamut = Gamut::from_measurements(measurements(&text), "corners").unwrap();
        assert_eq!(gamut.name(), "corners");
        assert_eq!(gamut.rgb().len(), 8);
        assert_eq!(gamut.xyz().len(), 8);
        assert_eq!(gamut.topology().len(), 12);
    }

    #[test]
    fn test_missing_sample_lists_every_gap() {
        // Drop two corners; both must be reported.
        let text: String = corner_text()
            .lines()
            .filter(|l| !l.starts_with("1 0 255") && !l.starts_with("1 255 0 255"))
            .map(|l| format!("{l}\n"))
            .collect();

        let err = Gamut::from_measurements(measurements(&text), "gappy").unwrap_err();
        match err {
            GamutError::MissingSamples(missing) => {
                assert_eq!(missing.len(), 3);
                assert!(missing.contains(&[0.0, 255.0, 0.0]));
                assert!(missing.contains(&[0.0, 255.0, 255.0]));
                assert!(missing.contains(&[255.0, 0.0, 255.0]));
            }
            other => panic!("expected MissingSamples, got {other:?}"),
        }
    }

    #[test]
    fn test_too_few_grey_levels() {
        let err = Gamut::from_measurements(measurements("1 5 5 5 0.2 0.2 0.2"), "flat").unwrap_err();
        assert!(matches!(err, GamutError::Mesh(_)));
    }
}
