//! # Formica
//!
//! An ant colony simulation engine. Ants explore a square terrain, find
//! food, and carry it home, coordinating only through scent trails that
//! fade over time.
//!
//! ## Quick Start
//!
//! ```rust
//! use formica::prelude::*;
//!
//! // A seeded world: one colony, twenty ants, fifty resource deposits
//! let mut sim = Simulation::new(42);
//!
//! // Drive it with real-time deltas; the speed multiplier scales them
//! sim.set_speed(2.0);
//! for _ in 0..100 {
//!     sim.tick(1.0 / 60.0);
//! }
//!
//! let stats = sim.stats();
//! println!("{} ants alive, {} food stored", stats.live_ants, stats.colonies[0].food_stored);
//! ```
//!
//! ## Architecture
//!
//! - [`formica_core`] - Shared types, geometry, configuration, errors
//! - [`formica_agents`] - Per-ant rules: state machine, locomotion, emission, genes
//! - [`formica_runtime`] - Scent field, resource ledger, colony economy, tick driver
//!
//! ## The Tick
//!
//! Every tick reads the previous snapshot and publishes a new one:
//!
//! | Stage | What happens |
//! |-------|--------------|
//! | Clock | Real delta × speed becomes simulated delta |
//! | Decide | Each ant picks its next state and target |
//! | Move | Each ant walks toward its target |
//! | Scent | Old deposits decay, ants leave new ones |
//! | Ledger | Gathering ants deplete resources |
//! | Economy | Ants home with food are credited to their colony |
//!
//! ### Ant States
//!
//! - **Idle** - Occasionally wakes up and starts exploring
//! - **Exploring** - Wanders, follows food trails, senses food directly
//! - **Gathering** - Walks to a food source and picks up a load
//! - **Returning** - Carries food home, guided by home trails
//! - **Dead** - Starved or too old; stays in the world, does nothing
//!
//! ### Two Trails
//!
//! Carriers lay FOOD scent, returning ants lay HOME scent. Explorers
//! follow FOOD scent outward; returning ants follow HOME scent back.
//! Deposits fade linearly and vanish after thirty time units.

// Re-export all subcrates
pub use formica_core as core;
pub use formica_runtime as runtime;
pub use formica_agents as agents;

/// Prelude module for convenient imports.
///
/// ```rust
/// use formica::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use formica_core::types::{
        AntId, ColonyId, ResourceId, PheromoneId, PredatorId,
        Vector3D, SimTime,
        Ant, AntGenes, AntRole, AntState, DeathCause,
        Colony,
        Resource, ResourceType,
        Pheromone, PheromoneType,
        Predator, PredatorState,
        SimulationState,
    };

    // Core traits
    pub use formica_core::field::{ScentField, ScentMatch, Surroundings};

    // Configuration
    pub use formica_core::config::{
        SimulationConfig, ClockConfig, BehaviorConfig, PheromoneConfig, EconomyConfig, WorldConfig,
    };

    // Error types
    pub use formica_core::error::{ConfigError, FormicaError, Result};

    // Agents
    pub use formica_agents::genome::{create_offspring, sample_genes, DEFAULT_MUTATION_RATE};

    // Runtime
    pub use formica_runtime::simulation::Simulation;
    pub use formica_runtime::events::TickEvent;
    pub use formica_runtime::stats::{ColonyDetails, StateCounts, WorldStats};
    pub use formica_runtime::field::PheromoneField;
}
