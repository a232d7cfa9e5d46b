//! Rotation policy that maps menus of any length onto a fixed wedge count.
//!
//! The wheel face never grows or shrinks. Instead, every time the pointer
//! crosses into a new wedge, the wedge diametrically opposite it (the one
//! the user is least likely to be watching) is reloaded with the next entry
//! from the full menu. Over the course of a spin the whole menu cycles
//! through the wheel while only `wedge_count` entries are ever drawn.

use super::geometry::WedgeRing;
use crate::domain::errors::WheelError;
use crate::domain::menu::Choice;

/// The working choice set actually assigned to wedges, plus the cursor into
/// the full enabled list that feeds substitutions.
#[derive(Debug, Clone)]
pub struct ChoiceRotation {
    working: Vec<Choice>,
    source: Vec<Choice>,
    cursor: usize,
}

impl ChoiceRotation {
    /// Builds the initial working set from the caller's enabled choices.
    ///
    /// The working set always has exactly `ring.wedge_count()` entries.
    /// Lists longer than the wheel contribute their first `wedge_count`
    /// entries and the cursor starts at the first unplaced one; shorter
    /// lists are repeated round-robin to fill every wedge. Fewer than two
    /// choices would leave nothing to pick between, so construction
    /// refuses.
    pub fn new(ring: &WedgeRing, source: Vec<Choice>) -> Result<Self, WheelError> {
        if source.len() < 2 {
            return Err(WheelError::NotEnoughChoices { got: source.len() });
        }
        let working = (0..ring.wedge_count())
            .map(|i| source[i % source.len()].clone())
            .collect();
        let cursor = ring.wedge_count() % source.len();
        Ok(Self {
            working,
            source,
            cursor,
        })
    }

    /// The choices currently assigned to wedges, in wedge order.
    pub fn working(&self) -> &[Choice] {
        &self.working
    }

    /// Number of entries in the full enabled list feeding the wheel.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Handles a crossing event at wedge `index`: substitutes the cursor's
    /// candidate into the antipodal wedge, advances the cursor, and returns
    /// the choice now aligned with the pointer.
    pub fn on_crossing(&mut self, ring: &WedgeRing, index: usize) -> &Choice {
        let opposite = ring.antipode(index);
        self.working[opposite] = self.source[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.source.len();
        &self.working[index]
    }
}
