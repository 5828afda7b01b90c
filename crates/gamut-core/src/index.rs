//! O(1) lookup from device RGB to measured tristimulus.

use std::collections::HashMap;

use gamut_math::Vec3;

use crate::Measurement;

/// Index from packed device-RGB keys to tristimulus values.
///
/// The key is `(R*S + G)*S + B` with `S = max(grey) + 1`, computed in f64
/// and hashed by bit pattern. That is exact because lookups only ever use
/// device values drawn verbatim from the measured set (the tessellation
/// emits the same f64s it was given), so both sides of a lookup run the
/// identical arithmetic.
///
/// Later rows overwrite earlier ones for the same device value.
#[derive(Debug, Clone)]
pub struct SampleIndex {
    map: HashMap<u64, Vec3>,
    span: f64,
}

impl SampleIndex {
    /// Builds the index over a measurement set.
    pub fn build(samples: &[Measurement]) -> Self {
        let max_grey = samples
            .iter()
            .flat_map(|s| s.rgb.iter().copied())
            .fold(0.0_f64, f64::max);
        let span = max_grey + 1.0;

        let mut map = HashMap::with_capacity(samples.len());
        for s in samples {
            map.insert(Self::key(span, s.rgb), s.xyz);
        }
        Self { map, span }
    }

    #[inline]
    fn key(span: f64, [r, g, b]: [f64; 3]) -> u64 {
        ((r * span + g) * span + b).to_bits()
    }

    /// Looks up the tristimulus value measured for a device RGB.
    #[inline]
    pub fn get(&self, rgb: [f64; 3]) -> Option<Vec3> {
        self.map.get(&Self::key(self.span, rgb)).copied()
    }

    /// Number of distinct device values indexed.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no samples were indexed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements;

    #[test]
    fn test_lookup_roundtrip() {
        let text = "\
1 0 0 0 0.0 0.0 0.0
1 0 0 255 0.14 0.06 0.71
1 255 255 255 0.96 1.0 0.82
";
        let samples: Vec<_> = measurements(text).collect();
        let index = SampleIndex::build(&samples);

        assert_eq!(index.len(), 3);
        assert_eq!(index.get([0.0, 0.0, 255.0]), Some(Vec3::new(0.14, 0.06, 0.71)));
        assert_eq!(index.get([0.0, 255.0, 0.0]), None);
    }

    #[test]
    fn test_no_key_collisions_across_channels() {
        // (0,255,0) and (255,0,0) must not collide despite equal sums
        let text = "\
1 255 0 0 1.0 0.0 0.0
1 0 255 0 0.0 1.0 0.0
1 0 0 255 0.0 0.0 1.0
";
        let samples: Vec<_> = measurements(text).collect();
        let index = SampleIndex::build(&samples);
        assert_eq!(index.get([255.0, 0.0, 0.0]), Some(Vec3::new(1.0, 0.0, 0.0)));
        assert_eq!(index.get([0.0, 255.0, 0.0]), Some(Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(index.get([0.0, 0.0, 255.0]), Some(Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_duplicate_rows_keep_last() {
        let text = "\
1 10 10 10 0.1 0.1 0.1
1 10 10 10 0.2 0.2 0.2
";
        let samples: Vec<_> = measurements(text).collect();
        let index = SampleIndex::build(&samples);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get([10.0, 10.0, 10.0]), Some(Vec3::splat(0.2)));
    }
}
