//! Formica Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_runtime::prelude::*;
//! ```

// Re-export the driver
pub use crate::simulation::Simulation;
pub use crate::events::TickEvent;
pub use crate::stats::{ColonyDetails, StateCounts, WorldStats};

// Re-export environment pieces
pub use crate::field::{decay_and_prune, PheromoneField};
pub use crate::ledger::apply_depletion;
pub use crate::economy::{settle, Delivery, Settlement};
pub use crate::world::build_world;

// Re-export from agents
pub use formica_agents::prelude::*;
