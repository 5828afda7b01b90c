//! Raw measurement ingestion.
//!
//! Colorimeter exports arrive as whitespace-separated numeric rows. The
//! significant columns are:
//!
//! ```text
//! flag  Rdev  Gdev  Bdev  X  Y  Z
//! ```
//!
//! Parsing is deliberately permissive: a row qualifies iff splitting on
//! whitespace yields at least 7 tokens and the first 7 parse to finite
//! numbers. Everything else - headers, comments, truncated lines, NaN
//! readings - is silently dropped. That loss is part of the format
//! contract, not an error condition; extra trailing columns are ignored.

use gamut_math::Vec3;

/// One accepted measurement row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Instrument flag column; carried through but not interpreted.
    pub flag: f64,
    /// Device code values (non-negative).
    pub rgb: [f64; 3],
    /// Measured tristimulus value.
    pub xyz: Vec3,
}

/// Scans measurement text into a lazy sequence of accepted rows.
///
/// The iterator borrows `text` and is restartable: calling again on the
/// same text yields the same sequence. Rows that do not qualify are
/// skipped without signal (see the module docs).
///
/// # Example
///
/// ```rust
/// use gamut_core::measurements;
///
/// let text = "\
/// header line, dropped
/// 1 0 0 0  0.01 0.01 0.01
/// 1 255 255 255  0.96 1.00 0.82  extra ignored
/// garbage row
/// ";
/// let rows: Vec<_> = measurements(text).collect();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].rgb, [255.0, 255.0, 255.0]);
/// ```
pub fn measurements(text: &str) -> impl Iterator<Item = Measurement> + '_ {
    text.lines().filter_map(parse_row)
}

fn parse_row(line: &str) -> Option<Measurement> {
    let mut tokens = line.split_whitespace();
    let mut v = [0.0_f64; 7];
    for slot in &mut v {
        *slot = tokens.next()?.parse().ok().filter(|x: &f64| x.is_finite())?;
    }
    Some(Measurement {
        flag: v[0],
        rgb: [v[1], v[2], v[3]],
        xyz: Vec3::new(v[4], v[5], v[6]),
    })
}

/// Collects the sorted distinct grey levels used by a measurement set.
///
/// Every device channel value of every sample contributes; the result is
/// the tessellation input for [`Gamut::from_measurements`].
///
/// [`Gamut::from_measurements`]: crate::Gamut::from_measurements
pub fn grey_levels(samples: &[Measurement]) -> Vec<f64> {
    let mut grey: Vec<f64> = samples
        .iter()
        .flat_map(|s| s.rgb.iter().copied())
        .collect();
    grey.sort_by(f64::total_cmp);
    grey.dedup();
    grey
}
