//! # Formica Agents
//!
//! Per-ant rules for the Formica colony simulation. Everything here is a
//! pure function of an ant, a read-only view of the previous snapshot,
//! and a random source:
//!
//! - **behavior**: the state machine (`step`) and metabolism
//! - **locomotion**: movement toward the current target (`advance`)
//! - **emission**: which pheromone an ant leaves behind (`emit`)
//! - **genome**: role-based gene sampling and offspring creation

pub mod behavior;
pub mod locomotion;
pub mod emission;
pub mod genome;
pub mod prelude;
