//! Events produced by a tick.

use formica_core::types::*;
use serde::Serialize;

/// Something noteworthy that happened during one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TickEvent {
    /// An ant ended the tick in a different state than it started.
    StateChanged { id: AntId, from: AntState, to: AntState },
    /// An ant died this tick.
    Died { id: AntId, cause: DeathCause },
    /// An ant handed food in at its colony.
    Delivered { ant: AntId, colony: ColonyId },
    /// A resource ran out this tick.
    ResourceDepleted { id: ResourceId },
    /// A tick completed.
    TickComplete {
        generation: u64,
        time: SimTime,
        alive: usize,
        deliveries: usize,
    },
}

impl TickEvent {
    pub fn is_tick_complete(&self) -> bool {
        matches!(self, TickEvent::TickComplete { .. })
    }
}
