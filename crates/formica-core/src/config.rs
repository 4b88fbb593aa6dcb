//! Tunable simulation parameters.
//!
//! Every constant the engine uses lives here with its default. Hosts can
//! load a partial JSON (or TOML, in the CLI) document; missing fields keep
//! their defaults.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Top-level configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub clock: ClockConfig,
    pub behavior: BehaviorConfig,
    pub pheromone: PheromoneConfig,
    pub economy: EconomyConfig,
    pub world: WorldConfig,
}

/// Speed bounds and run state at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Lowest accepted speed multiplier (default: 0.1).
    pub min_speed: f64,
    /// Highest accepted speed multiplier (default: 10.0).
    pub max_speed: f64,
    /// Speed at construction and after reset (default: 1.0).
    pub initial_speed: f64,
    /// Whether a freshly constructed simulation starts paused (default: false).
    pub start_paused: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            min_speed: 0.1,
            max_speed: 10.0,
            initial_speed: 1.0,
            start_paused: false,
        }
    }
}

/// Constants of the per-ant state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Chance per tick that an idle ant starts exploring (default: 0.05).
    pub idle_wake_probability: f64,
    /// Radius of fresh wander targets (default: 10.0).
    pub wander_radius: f64,
    /// Distance at which a target counts as reached (default: 0.5).
    pub arrival_radius: f64,
    /// Distance to the colony that counts as home (default: 1.0).
    pub home_radius: f64,
    /// Distance at which a gathering ant finds the food it came for (default: 1.0).
    pub pickup_radius: f64,
    /// Chance per tick that an exploring ant consults food trails (default: 0.85).
    pub food_trail_follow_probability: f64,
    /// Food trail search radius as a multiple of sense range (default: 1.5).
    pub food_trail_range_factor: f64,
    /// Trail strength above which an explorer commits to gathering (default: 0.6).
    pub food_trail_commit_strength: f64,
    /// Chance per tick that a returning ant consults home trails (default: 0.7).
    pub home_trail_follow_probability: f64,
    /// Weight of the straight-home direction when blending with a trail (default: 0.7).
    pub home_blend: f64,
    /// How far ahead the blended home target is projected (default: 5.0).
    pub home_projection: f64,
    /// Food an ant eats when it gets home carrying food (default: 40.0).
    pub replenish_amount: f64,
    /// Food burned every tick (default: 0.005).
    pub food_consumption_per_tick: f64,
    /// Age gained every tick (default: 0.01).
    pub age_per_tick: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            idle_wake_probability: 0.05,
            wander_radius: 10.0,
            arrival_radius: 0.5,
            home_radius: 1.0,
            pickup_radius: 1.0,
            food_trail_follow_probability: 0.85,
            food_trail_range_factor: 1.5,
            food_trail_commit_strength: 0.6,
            home_trail_follow_probability: 0.7,
            home_blend: 0.7,
            home_projection: 5.0,
            replenish_amount: 40.0,
            food_consumption_per_tick: 0.005,
            age_per_tick: 0.01,
        }
    }
}

/// Decay, detection and emission of scent deposits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PheromoneConfig {
    /// Age at which a deposit is removed (default: 30.0).
    pub lifetime: f64,
    /// Decayed strength at or below which a deposit is removed (default: 0.1).
    pub removal_strength: f64,
    /// Strength at or below which a deposit is invisible to queries (default: 0.15).
    pub detection_threshold: f64,
    /// Emission chance for an ant carrying food (default: 0.3).
    pub carrying_probability: f64,
    /// Emission chance for a returning ant without food (default: 0.25).
    pub returning_probability: f64,
    /// Emission chance for any other live ant (default: 0.08).
    pub ambient_probability: f64,
    /// Base strength of a food-carrier's deposit (default: 1.0).
    pub carrying_strength: f64,
    /// Base strength of a returning ant's deposit (default: 0.8).
    pub returning_strength: f64,
    /// Base strength of an incidental deposit (default: 0.4).
    pub ambient_strength: f64,
    /// Multiplier on FOOD deposits left while carrying food (default: 1.5).
    pub food_carry_boost: f64,
    /// Multiplier on HOME deposits left while returning (default: 1.3).
    pub home_return_boost: f64,
}

impl Default for PheromoneConfig {
    fn default() -> Self {
        Self {
            lifetime: 30.0,
            removal_strength: 0.1,
            detection_threshold: 0.15,
            carrying_probability: 0.3,
            returning_probability: 0.25,
            ambient_probability: 0.08,
            carrying_strength: 1.0,
            returning_strength: 0.8,
            ambient_strength: 0.4,
            food_carry_boost: 1.5,
            home_return_boost: 1.3,
        }
    }
}

/// Resource depletion and colony crediting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Per-axis tolerance matching a gatherer's target to a resource (default: 0.5).
    pub gather_tolerance: f64,
    /// Amount removed per gathering ant per tick (default: 0.1).
    pub depletion_rate: f64,
    /// Distance to the colony at which food is handed in (default: 1.0).
    /// Must be at least `behavior.home_radius`.
    pub delivery_radius: f64,
    /// Food credited per delivering ant (default: 1.0).
    pub food_per_delivery: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            gather_tolerance: 0.5,
            depletion_rate: 0.1,
            delivery_radius: 1.0,
            food_per_delivery: 1.0,
        }
    }
}

/// Initial world layout used on construction and reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Edge length of the square terrain, centered on the origin (default: 100.0).
    pub terrain_size: f64,
    /// Food in the colony store at start (default: 200.0).
    pub starting_food: f64,
    pub workers: u32,
    pub soldiers: u32,
    pub queens: u32,
    /// Ants hatch within this distance of the colony (default: 5.0).
    pub spawn_radius: f64,
    /// Fraction of capacity an ant starts with (default: 0.8).
    pub initial_food_fraction: f64,
    /// Lifespan range `[min, max)` sampled per ant (default: 150..250).
    pub max_age_min: f64,
    pub max_age_max: f64,
    /// Total resource deposits (default: 50).
    pub resource_count: usize,
    /// Number of spatial clusters (default: 5).
    pub cluster_count: usize,
    /// Share of deposits placed in clusters (default: 0.8).
    pub clustered_fraction: f64,
    /// Chance a clustered deposit is food rather than water (default: 0.8).
    pub clustered_food_share: f64,
    /// Chance a scattered deposit is food rather than water (default: 0.7).
    pub scattered_food_share: f64,
    /// Amount range `[min, max)` for clustered deposits (default: 100..250).
    pub clustered_amount_min: f64,
    pub clustered_amount_max: f64,
    /// Amount range `[min, max)` for scattered deposits (default: 50..100).
    pub scattered_amount_min: f64,
    pub scattered_amount_max: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            terrain_size: 100.0,
            starting_food: 200.0,
            workers: 15,
            soldiers: 4,
            queens: 1,
            spawn_radius: 5.0,
            initial_food_fraction: 0.8,
            max_age_min: 150.0,
            max_age_max: 250.0,
            resource_count: 50,
            cluster_count: 5,
            clustered_fraction: 0.8,
            clustered_food_share: 0.8,
            scattered_food_share: 0.7,
            clustered_amount_min: 100.0,
            clustered_amount_max: 250.0,
            scattered_amount_min: 50.0,
            scattered_amount_max: 100.0,
        }
    }
}

impl WorldConfig {
    /// Total ants hatched on reset.
    pub fn population(&self) -> u32 {
        self.workers + self.soldiers + self.queens
    }
}

impl SimulationConfig {
    /// Parse a (possibly partial) JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Clamp a requested speed into the configured range.
    pub fn clamp_speed(&self, speed: f64) -> f64 {
        if speed.is_nan() {
            return self.clock.initial_speed;
        }
        speed.clamp(self.clock.min_speed, self.clock.max_speed)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let clock = &self.clock;
        for (field, value) in [
            ("clock.min_speed", clock.min_speed),
            ("clock.max_speed", clock.max_speed),
            ("clock.initial_speed", clock.initial_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, value, "must be finite"));
            }
        }
        if clock.min_speed <= 0.0 {
            return Err(ConfigError::invalid(
                "clock.min_speed",
                clock.min_speed,
                "must be positive",
            ));
        }
        if clock.max_speed < clock.min_speed {
            return Err(ConfigError::invalid(
                "clock.max_speed",
                clock.max_speed,
                "must not be below clock.min_speed",
            ));
        }
        if !(clock.min_speed..=clock.max_speed).contains(&clock.initial_speed) {
            return Err(ConfigError::out_of_range(
                "clock.initial_speed",
                clock.min_speed,
                clock.max_speed,
                clock.initial_speed,
            ));
        }

        let b = &self.behavior;
        let p = &self.pheromone;
        let w = &self.world;
        let probabilities = [
            ("behavior.idle_wake_probability", b.idle_wake_probability),
            ("behavior.food_trail_follow_probability", b.food_trail_follow_probability),
            ("behavior.home_trail_follow_probability", b.home_trail_follow_probability),
            ("behavior.home_blend", b.home_blend),
            ("pheromone.carrying_probability", p.carrying_probability),
            ("pheromone.returning_probability", p.returning_probability),
            ("pheromone.ambient_probability", p.ambient_probability),
            ("world.initial_food_fraction", w.initial_food_fraction),
            ("world.clustered_fraction", w.clustered_fraction),
            ("world.clustered_food_share", w.clustered_food_share),
            ("world.scattered_food_share", w.scattered_food_share),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::out_of_range(field, 0.0, 1.0, value));
            }
        }

        let non_negative = [
            ("behavior.wander_radius", b.wander_radius),
            ("behavior.arrival_radius", b.arrival_radius),
            ("behavior.home_radius", b.home_radius),
            ("behavior.pickup_radius", b.pickup_radius),
            ("behavior.food_trail_range_factor", b.food_trail_range_factor),
            ("behavior.home_projection", b.home_projection),
            ("behavior.replenish_amount", b.replenish_amount),
            ("behavior.food_consumption_per_tick", b.food_consumption_per_tick),
            ("behavior.age_per_tick", b.age_per_tick),
            ("pheromone.removal_strength", p.removal_strength),
            ("pheromone.detection_threshold", p.detection_threshold),
            ("economy.gather_tolerance", self.economy.gather_tolerance),
            ("economy.depletion_rate", self.economy.depletion_rate),
            ("economy.delivery_radius", self.economy.delivery_radius),
            ("economy.food_per_delivery", self.economy.food_per_delivery),
            ("world.terrain_size", w.terrain_size),
            ("world.spawn_radius", w.spawn_radius),
            ("world.starting_food", w.starting_food),
            ("world.max_age_min", w.max_age_min),
            ("world.max_age_max", w.max_age_max),
            ("world.clustered_amount_min", w.clustered_amount_min),
            ("world.clustered_amount_max", w.clustered_amount_max),
            ("world.scattered_amount_min", w.scattered_amount_min),
            ("world.scattered_amount_max", w.scattered_amount_max),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, value, "must be finite"));
            }
            if value < 0.0 {
                return Err(ConfigError::invalid(field, value, "must not be negative"));
            }
        }

        // The state machine drops a carrier's load inside `home_radius`; the
        // economy must have counted it by then.
        if self.economy.delivery_radius < b.home_radius {
            return Err(ConfigError::invalid(
                "economy.delivery_radius",
                self.economy.delivery_radius,
                "must not be below behavior.home_radius",
            ));
        }

        if !p.lifetime.is_finite() || p.lifetime <= 0.0 {
            return Err(ConfigError::invalid("pheromone.lifetime", p.lifetime, "must be positive"));
        }
        let strengths = [
            ("pheromone.carrying_strength", p.carrying_strength),
            ("pheromone.returning_strength", p.returning_strength),
            ("pheromone.ambient_strength", p.ambient_strength),
        ];
        for (field, value) in strengths {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::out_of_range(field, 0.0, 1.0, value));
            }
        }
        if w.population() == 0 {
            return Err(ConfigError::invalid(
                "world.workers",
                w.workers,
                "colony needs at least one ant",
            ));
        }
        if w.max_age_max < w.max_age_min || w.max_age_min <= 0.0 {
            return Err(ConfigError::invalid(
                "world.max_age_max",
                w.max_age_max,
                "lifespan range must be positive and ordered",
            ));
        }
        if w.clustered_amount_max < w.clustered_amount_min
            || w.scattered_amount_max < w.scattered_amount_min
        {
            return Err(ConfigError::invalid(
                "world.clustered_amount_max",
                w.clustered_amount_max,
                "amount ranges must be ordered",
            ));
        }
        Ok(())
    }
}
