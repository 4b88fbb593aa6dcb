//! # Formica Runtime
//!
//! The tick driver and the shared environment.
//!
//! The runtime owns the world snapshot. It runs the per-ant rules from
//! `formica-agents` against the previous snapshot, then merges their side
//! effects (scent deposits, resource depletion, colony deliveries) into
//! the next one.

pub mod field;
pub mod ledger;
pub mod economy;
pub mod world;
pub mod events;
pub mod stats;
pub mod simulation;
pub mod prelude;
