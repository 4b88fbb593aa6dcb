//! Formica Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_core::prelude::*;
//! ```

pub use crate::types::{
    AntId, ColonyId, ResourceId, PheromoneId, PredatorId,
    Vector3D, SimTime,
    Ant, AntGenes, AntRole, AntState, DeathCause,
    Colony,
    Resource, ResourceType,
    Pheromone, PheromoneType,
    Predator, PredatorState,
    SimulationState,
};

pub use crate::geometry::{heading_of, random_point_near};

pub use crate::field::{ScentField, ScentMatch, Surroundings};

pub use crate::config::{
    SimulationConfig, ClockConfig, BehaviorConfig, PheromoneConfig, EconomyConfig, WorldConfig,
};

pub use crate::rng::{create_rng, SimRng};

pub use crate::error::{ConfigError, FormicaError, Result};
