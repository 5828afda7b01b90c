//! Gamut comparison session.
//!
//! A session owns the growing list of loaded gamuts and the three derived
//! slots of a comparison: the reference boundary, the test boundary, and
//! their intersection. Slots only ever change by whole-value replacement;
//! nothing in a session is edited in place.

use gamut_mesh::intersect;

use crate::{Gamut, GamutResult, LabMesh};

/// Comparison context: loaded gamuts plus reference/test/intersection
/// slots.
///
/// The intersection slot holds the test boundary clipped against the
/// reference boundary. If the clip fails (reference mesh not closed
/// around the anchor), only that slot empties; the reference and test
/// slots stay valid and usable.
#[derive(Debug)]
pub struct Session {
    gamuts: Vec<Gamut>,
    reference: usize,
    test: usize,
    reference_view: LabMesh,
    test_view: LabMesh,
    intersection_view: Option<LabMesh>,
}

impl Session {
    /// Creates a session with one gamut selected as both reference and
    /// test.
    pub fn new(initial: Gamut) -> GamutResult<Self> {
        let view = LabMesh::from_gamut(&initial)?;
        let mut session = Self {
            gamuts: vec![initial],
            reference: 0,
            test: 0,
            reference_view: view.clone(),
            test_view: view,
            intersection_view: None,
        };
        session.rebuild_intersection()?;
        Ok(session)
    }

    /// Adds a gamut to the session without changing any selection.
    ///
    /// Returns the new gamut's index.
    pub fn import(&mut self, gamut: Gamut) -> usize {
        self.gamuts.push(gamut);
        self.gamuts.len() - 1
    }

    /// Selects the reference gamut and rebuilds the dependent slots.
    ///
    /// An out-of-range index falls back to the most recently imported
    /// gamut. Selecting the already-current index is a no-op.
    pub fn set_reference(&mut self, index: usize) -> GamutResult<()> {
        let index = self.clamp(index);
        if index == self.reference {
            return Ok(());
        }
        self.reference_view = LabMesh::from_gamut(&self.gamuts[index])?;
        self.reference = index;
        self.rebuild_intersection()
    }

    /// Selects the test gamut and rebuilds the dependent slots.
    ///
    /// Same fallback and no-op rules as [`Self::set_reference`].
    pub fn set_test(&mut self, index: usize) -> GamutResult<()> {
        let index = self.clamp(index);
        if index == self.test {
            return Ok(());
        }
        self.test_view = LabMesh::from_gamut(&self.gamuts[index])?;
        self.test = index;
        self.rebuild_intersection()
    }

    fn clamp(&self, index: usize) -> usize {
        if index < self.gamuts.len() {
            index
        } else {
            self.gamuts.len() - 1
        }
    }

    fn rebuild_intersection(&mut self) -> GamutResult<()> {
        self.intersection_view = None;
        let mesh = intersect(self.reference_view.mesh(), self.test_view.mesh())?;
        self.intersection_view = Some(LabMesh::from_boundary(mesh, self.test_view.rgb().to_vec()));
        Ok(())
    }

    /// All loaded gamuts, in import order.
    #[inline]
    pub fn gamuts(&self) -> &[Gamut] {
        &self.gamuts
    }

    /// Index of the current reference gamut.
    #[inline]
    pub fn reference_index(&self) -> usize {
        self.reference
    }

    /// Index of the current test gamut.
    #[inline]
    pub fn test_index(&self) -> usize {
        self.test
    }

    /// The reference boundary slot.
    #[inline]
    pub fn reference_view(&self) -> &LabMesh {
        &self.reference_view
    }

    /// The test boundary slot.
    #[inline]
    pub fn test_view(&self) -> &LabMesh {
        &self.test_view
    }

    /// The intersection slot, if the last rebuild succeeded.
    #[inline]
    pub fn intersection_view(&self) -> Option<&LabMesh> {
        self.intersection_view.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimariesDescriptor;
    use approx::assert_relative_eq;

    fn rec2020() -> Gamut {
        let desc = PrimariesDescriptor::rec2020().unwrap();
        Gamut::from_primaries(&desc, "rec2020").unwrap()
    }

    fn narrow() -> Gamut {
        // Shrink the corner tristimuli toward the white axis: a device
        // with the same grid but a smaller gamut.
        let mut desc = PrimariesDescriptor::rec2020().unwrap();
        let w = desc.primaries[7];
        for p in desc.primaries.iter_mut() {
            for c in 0..3 {
                p[3 + c] = 0.7 * p[3 + c] + 0.3 * (p[c] / 255.0) * w[3 + c];
            }
        }
        Gamut::from_primaries(&desc, "narrow").unwrap()
    }

    #[test]
    fn test_new_session_builds_all_slots() {
        let session = Session::new(rec2020()).unwrap();
        assert_eq!(session.gamuts().len(), 1);
        assert_eq!(session.reference_index(), 0);
        assert_eq!(session.test_index(), 0);
        assert!(session.intersection_view().is_some());
    }

    #[test]
    fn test_self_intersection_volume_matches() {
        // Reference == test: the clip leaves every vertex in place.
        let session = Session::new(rec2020()).unwrap();
        let inter = session.intersection_view().unwrap();
        assert_relative_eq!(
            inter.volume(),
            session.test_view().volume(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_import_does_not_change_selection() {
        let mut session = Session::new(rec2020()).unwrap();
        let idx = session.import(narrow());
        assert_eq!(idx, 1);
        assert_eq!(session.reference_index(), 0);
        assert_eq!(session.test_index(), 0);
    }

    #[test]
    fn test_set_test_rebuilds_intersection() {
        let mut session = Session::new(rec2020()).unwrap();
        let idx = session.import(narrow());
        session.set_test(idx).unwrap();

        let inter = session.intersection_view().unwrap();
        // Narrow gamut inside the wide reference: intersection is close
        // to the narrow test gamut itself.
        let test_vol = session.test_view().volume();
        assert!(inter.volume() <= test_vol * 1.001);
        assert!(inter.volume() > 0.0);
    }

    #[test]
    fn test_out_of_range_selection_clamps_to_newest() {
        let mut session = Session::new(rec2020()).unwrap();
        session.import(narrow());
        session.set_test(99).unwrap();
        assert_eq!(session.test_index(), 1);
    }
}
