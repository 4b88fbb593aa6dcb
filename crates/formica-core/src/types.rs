//! Shared types used across the engine crates.
//!
//! Everything here is plain data. Behavior lives in `formica-agents`
//! (per-ant rules) and `formica-runtime` (field, ledger, economy, clock).

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Simulated time, in the same units as the scaled tick delta.
pub type SimTime = f64;

// Ids are drawn from the simulation RNG so that a seeded run produces the
// same ids every time. `new()` is kept for hosts that build entities by hand.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Deterministic id from a plain integer (for tests and fixtures).
            pub fn from_seed(seed: u64) -> Self {
                Self(Uuid::from_u64_pair(0, seed))
            }

            /// Draw an id from a seeded random source.
            pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Self(Uuid::from_u128(rng.random::<u128>()))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for an ant.
    AntId
);
entity_id!(
    /// Unique identifier for a colony.
    ColonyId
);
entity_id!(
    /// Unique identifier for a resource deposit.
    ResourceId
);
entity_id!(
    /// Unique identifier for a pheromone deposit.
    PheromoneId
);
entity_id!(
    /// Unique identifier for a predator (reserved).
    PredatorId
);

/// A point or direction in world space.
///
/// Ants live on the ground plane: `y` stays at 0 and movement happens
/// in `x`/`z`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Behavioral state of an ant.
///
/// Only `Idle`, `Exploring`, `Gathering`, `Returning` and `Dead` are
/// reachable through the current rules. The others are reserved and
/// treated as inert by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AntState {
    Idle,
    Exploring,
    Gathering,
    Returning,
    Reproducing,
    Fleeing,
    Fighting,
    Dead,
}

impl AntState {
    /// All states, in declaration order.
    pub const ALL: [AntState; 8] = [
        AntState::Idle,
        AntState::Exploring,
        AntState::Gathering,
        AntState::Returning,
        AntState::Reproducing,
        AntState::Fleeing,
        AntState::Fighting,
        AntState::Dead,
    ];

    /// Whether the state has no behavior rules attached yet.
    pub fn is_reserved(&self) -> bool {
        matches!(self, AntState::Reproducing | AntState::Fleeing | AntState::Fighting)
    }
}

impl std::fmt::Display for AntState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AntState::Idle => "idle",
            AntState::Exploring => "exploring",
            AntState::Gathering => "gathering",
            AntState::Returning => "returning",
            AntState::Reproducing => "reproducing",
            AntState::Fleeing => "fleeing",
            AntState::Fighting => "fighting",
            AntState::Dead => "dead",
        };
        f.write_str(name)
    }
}

/// Why an ant died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    /// Food level ran out.
    Starvation,
    /// Age passed the ant's lifespan.
    OldAge,
}

/// Caste an ant was hatched into. Only used to sample initial genes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AntRole {
    Worker,
    Soldier,
    Queen,
}

/// Heritable per-ant parameters. Never changed after hatching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntGenes {
    pub speed: f64,
    pub strength: f64,
    /// Radius within which resources are sensed directly.
    pub sense_range: f64,
    pub max_health: f64,
    /// Upper bound for `Ant::food_level`.
    pub max_food_capacity: f64,
}

/// A single agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ant {
    pub id: AntId,
    pub position: Vector3D,
    /// Yaw around the vertical axis, radians. Faces the last direction of travel.
    pub heading: f64,
    pub speed: f64,
    /// Cosmetic; nothing reduces it yet.
    pub health: f64,
    /// Always within `[0, genes.max_food_capacity]`.
    pub food_level: f64,
    /// Owning colony. A reference, may dangle.
    pub colony: ColonyId,
    pub state: AntState,
    pub target: Option<Vector3D>,
    pub carrying_food: bool,
    pub genes: AntGenes,
    pub generation: u32,
    pub age: f64,
    pub max_age: f64,
}

impl Ant {
    pub fn is_dead(&self) -> bool {
        self.state == AntState::Dead
    }
}

/// A home nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colony {
    pub id: ColonyId,
    pub position: Vector3D,
    /// Only ever grows from the engine's side.
    pub food_stored: f64,
    // Descriptive composition counters, not enforced.
    pub population: u32,
    pub queens: u32,
    pub workers: u32,
    pub soldiers: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Food,
    Water,
}

/// A depletable deposit in the terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub position: Vector3D,
    pub resource_type: ResourceType,
    /// Non-negative and non-increasing; never replenished.
    pub amount: f64,
}

impl Resource {
    /// A resource with `amount == 0` stays in the world but is inert.
    pub fn is_depleted(&self) -> bool {
        self.amount <= 0.0
    }

    /// Food that ants can still sense and carry.
    pub fn is_available_food(&self) -> bool {
        self.resource_type == ResourceType::Food && self.amount > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PheromoneType {
    Food,
    Home,
    /// Reserved; never emitted by the current rules.
    Danger,
}

/// A scent deposit left by an ant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pheromone {
    pub id: PheromoneId,
    /// Emitter's position at the moment of deposit.
    pub position: Vector3D,
    pub pheromone_type: PheromoneType,
    /// Strength at creation, in `(0, 1]`.
    pub initial_strength: f64,
    /// Strength as of the last decay pass.
    pub strength: f64,
    pub created_at: SimTime,
}

impl Pheromone {
    /// Time elapsed since the deposit was made.
    pub fn age_at(&self, now: SimTime) -> f64 {
        (now - self.created_at).max(0.0)
    }

    /// Linear decay: `initial × (1 − age / lifetime)`, floored at zero.
    pub fn strength_at(&self, now: SimTime, lifetime: f64) -> f64 {
        if lifetime <= 0.0 {
            return 0.0;
        }
        (self.initial_strength * (1.0 - self.age_at(now) / lifetime)).max(0.0)
    }
}

/// Behavioral state of a predator. Reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredatorState {
    Idle,
    Hunting,
    Eating,
    Resting,
}

/// Reserved for future predator behavior; never populated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predator {
    pub id: PredatorId,
    pub position: Vector3D,
    pub heading: f64,
    pub speed: f64,
    pub health: f64,
    pub state: PredatorState,
    pub target: Option<AntId>,
}

/// The complete world at one instant.
///
/// Published once per tick and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Number of ticks that advanced the world since the last reset.
    pub generation: u64,
    pub time: SimTime,
    /// Speed multiplier applied to real deltas.
    pub speed: f64,
    pub is_paused: bool,
    pub ants: Vec<Ant>,
    pub colonies: Vec<Colony>,
    pub resources: Vec<Resource>,
    pub pheromones: Vec<Pheromone>,
    pub predators: Vec<Predator>,
    /// Cosmetic, for the renderer.
    pub terrain_seed: f64,
}

impl SimulationState {
    /// An empty world at time zero.
    pub fn empty() -> Self {
        Self {
            generation: 0,
            time: 0.0,
            speed: 1.0,
            is_paused: false,
            ants: Vec::new(),
            colonies: Vec::new(),
            resources: Vec::new(),
            pheromones: Vec::new(),
            predators: Vec::new(),
            terrain_seed: 0.0,
        }
    }

    /// Look up a colony by id.
    pub fn colony(&self, id: &ColonyId) -> Option<&Colony> {
        self.colonies.iter().find(|c| c.id == *id)
    }

    /// Look up an ant by id.
    pub fn ant(&self, id: &AntId) -> Option<&Ant> {
        self.ants.iter().find(|a| a.id == *id)
    }

    /// Ants that are not dead.
    pub fn live_ants(&self) -> impl Iterator<Item = &Ant> {
        self.ants.iter().filter(|a| !a.is_dead())
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::empty()
    }
}
