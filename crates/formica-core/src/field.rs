//! Scent field: the shared medium ants communicate through.
//!
//! Ants never talk to each other directly. They leave deposits in the
//! field and read it back. The trait is the query seam: the runtime's
//! linear scan sits behind it today, and a spatial index can replace it
//! without touching the behavior rules.

use crate::types::*;

/// A deposit returned by a field query, with its strength at query time.
#[derive(Debug, Clone, Copy)]
pub struct ScentMatch<'a> {
    pub pheromone: &'a Pheromone,
    /// Decayed strength at the moment of the query.
    pub strength: f64,
}

/// Read access to pheromone deposits.
pub trait ScentField {
    /// Strongest deposit of `kind` within `range` of `position`.
    ///
    /// Candidates are ranked by `strength × (1 − distance / range)`; the
    /// first candidate wins a tie. Deposits at or below the detection
    /// threshold are invisible.
    fn strongest(
        &self,
        position: &Vector3D,
        kind: PheromoneType,
        range: f64,
    ) -> Option<ScentMatch<'_>>;

    /// Number of live deposits.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything an ant may look at when deciding its next move.
///
/// Always built from the previous snapshot, so every ant in a tick sees
/// the same world regardless of evaluation order.
pub struct Surroundings<'a> {
    pub colonies: &'a [Colony],
    pub resources: &'a [Resource],
    pub scents: &'a dyn ScentField,
}

impl<'a> Surroundings<'a> {
    pub fn colony(&self, id: &ColonyId) -> Option<&'a Colony> {
        self.colonies.iter().find(|c| c.id == *id)
    }
}
