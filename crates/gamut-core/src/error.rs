//! Gamut construction error types.

use thiserror::Error;

/// Result type for gamut operations.
pub type GamutResult<T> = Result<T, GamutError>;

/// Errors raised while constructing or comparing gamuts.
///
/// Malformed measurement rows are deliberately *not* represented here:
/// the ingest scanner drops them silently (see
/// [`measurements`](crate::measurements)).
#[derive(Debug, Error)]
pub enum GamutError {
    /// The measurement set lacks tristimulus data for canonical device
    /// values the tessellation requires. Carries *every* missing RGB, not
    /// just the first.
    #[error("tristimulus data missing for {} canonical device values: {:?}", .0.len(), .0)]
    MissingSamples(Vec<[f64; 3]>),

    /// A primaries descriptor did not contain exactly 8 records.
    #[error("primaries descriptor must hold exactly 8 records, got {0}")]
    WrongPrimaryCount(usize),

    /// A primary's device coordinates are not all at the minimum or
    /// maximum grey level, so it cannot be assigned a cube corner.
    /// Off-corner primaries are rejected, never guessed at.
    #[error("primary {index} with device value {rgb:?} does not sit on a corner of the grey-level cube")]
    OffCornerPrimary {
        /// Position of the record in the descriptor.
        index: usize,
        /// Its device RGB value.
        rgb: [f64; 3],
    },

    /// Two primaries classified to the same cube corner.
    #[error("two primaries classify to cube corner {0}")]
    DuplicateCorner(&'static str),

    /// No primary classified to a required cube corner.
    #[error("no primary classifies to cube corner {0}")]
    MissingCorner(&'static str),

    /// Geometry error from the mesh layer.
    #[error(transparent)]
    Mesh(#[from] gamut_mesh::MeshError),

    /// Descriptor deserialization error.
    #[error("primaries descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
