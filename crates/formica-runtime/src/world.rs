//! World generation: the starting colony, its ants, and the resource field.
//!
//! Layout of a fresh world:
//! - one colony at the origin with the configured store and composition
//! - ants hatched around the colony, heading off toward random points
//!   within a third of the terrain
//! - resources mostly grouped into clusters, the remainder scattered

use formica_agents::genome::{role_for_index, sample_genes};
use formica_core::config::{SimulationConfig, WorldConfig};
use formica_core::geometry::random_point_near;
use formica_core::types::*;
use rand::Rng;
use std::f64::consts::TAU;

/// Cluster centers lie within `terrain / CLUSTER_CENTER_DIVISOR` of the origin.
const CLUSTER_CENTER_DIVISOR: f64 = 2.5;
/// Deposits in a cluster spread `base + U(0, extra)` around its center.
const CLUSTER_SPREAD_BASE: f64 = 4.0;
const CLUSTER_SPREAD_EXTRA: f64 = 3.0;

/// The starting colony at the origin.
pub fn initial_colony<R: Rng + ?Sized>(world: &WorldConfig, rng: &mut R) -> Colony {
    Colony {
        id: ColonyId::from_rng(rng),
        position: Vector3D::ZERO,
        food_stored: world.starting_food,
        population: world.population(),
        queens: world.queens,
        workers: world.workers,
        soldiers: world.soldiers,
    }
}

/// Hatch the colony's starting population, workers first.
pub fn hatch_ants<R: Rng + ?Sized>(colony: &Colony, world: &WorldConfig, rng: &mut R) -> Vec<Ant> {
    let wander = world.terrain_size / 3.0;
    (0..world.population())
        .map(|index| {
            let genes = sample_genes(role_for_index(index, world), rng);
            let max_age = sample_between(world.max_age_min, world.max_age_max, rng);
            Ant {
                id: AntId::from_rng(rng),
                position: random_point_near(&colony.position, world.spawn_radius, rng),
                heading: rng.random::<f64>() * TAU,
                speed: genes.speed,
                health: genes.max_health,
                food_level: genes.max_food_capacity * world.initial_food_fraction.clamp(0.0, 1.0),
                colony: colony.id,
                state: AntState::Exploring,
                target: Some(random_point_near(&Vector3D::ZERO, wander, rng)),
                carrying_food: false,
                genes,
                generation: 1,
                age: 0.0,
                max_age,
            }
        })
        .collect()
}

/// Scatter the resource field.
///
/// `floor(count × clustered_fraction / clusters)` deposits go into each
/// cluster; whatever is left over is placed uniformly.
pub fn generate_resources<R: Rng + ?Sized>(world: &WorldConfig, rng: &mut R) -> Vec<Resource> {
    let per_cluster = if world.cluster_count == 0 {
        0
    } else {
        let share = world.resource_count as f64 * world.clustered_fraction;
        (share / world.cluster_count as f64).floor() as usize
    };
    let clustered = (per_cluster * world.cluster_count).min(world.resource_count);
    let scattered = world.resource_count - clustered;

    let mut resources = Vec::with_capacity(world.resource_count);
    for _ in 0..world.cluster_count {
        let reach = world.terrain_size / CLUSTER_CENTER_DIVISOR;
        let center = random_point_near(&Vector3D::ZERO, reach, rng);
        for _ in 0..per_cluster {
            let spread = CLUSTER_SPREAD_BASE + rng.random::<f64>() * CLUSTER_SPREAD_EXTRA;
            resources.push(Resource {
                id: ResourceId::from_rng(rng),
                position: random_point_near(&center, spread, rng),
                resource_type: pick_type(world.clustered_food_share, rng),
                amount: sample_between(world.clustered_amount_min, world.clustered_amount_max, rng),
            });
        }
    }

    for _ in 0..scattered {
        resources.push(Resource {
            id: ResourceId::from_rng(rng),
            position: random_point_near(&Vector3D::ZERO, world.terrain_size / 2.0, rng),
            resource_type: pick_type(world.scattered_food_share, rng),
            amount: sample_between(world.scattered_amount_min, world.scattered_amount_max, rng),
        });
    }

    resources
}

/// A fresh world at time zero with an empty pheromone field.
pub fn build_world<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> SimulationState {
    let colony = initial_colony(&config.world, rng);
    let ants = hatch_ants(&colony, &config.world, rng);
    let resources = generate_resources(&config.world, rng);

    SimulationState {
        generation: 0,
        time: 0.0,
        speed: config.clamp_speed(config.clock.initial_speed),
        is_paused: config.clock.start_paused,
        ants,
        colonies: vec![colony],
        resources,
        pheromones: Vec::new(),
        predators: Vec::new(),
        terrain_seed: rng.random::<f64>() * 1000.0,
    }
}

fn pick_type<R: Rng + ?Sized>(food_share: f64, rng: &mut R) -> ResourceType {
    if rng.random::<f64>() < food_share {
        ResourceType::Food
    } else {
        ResourceType::Water
    }
}

fn sample_between<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> f64 {
    if max <= min {
        return min;
    }
    min + rng.random::<f64>() * (max - min)
}
