//! Ant state machine: one decision per ant per tick.
//!
//! An ant looks at the previous snapshot (resources, colonies, scent
//! field) and decides its next state, target, and whether it is carrying
//! food. Then it metabolizes: burns food, ages, and possibly dies.
//!
//! ```text
//!   IDLE ──wake──▶ EXPLORING ──food sensed / strong trail──▶ GATHERING
//!                     ▲                                         │
//!                     │◀──────── nothing at target ─────────────┤
//!                     │                                         ▼ food here
//!                     └──────────── reached home ◀──────── RETURNING
//!
//!   any live state ──starved / too old──▶ DEAD (absorbing)
//! ```
//!
//! Exploring ants follow FOOD trails to find sources; returning ants
//! follow HOME trails to find the nest.

use formica_core::config::BehaviorConfig;
use formica_core::field::Surroundings;
use formica_core::geometry::random_point_near;
use formica_core::rng::chance;
use formica_core::types::*;
use rand::Rng;

/// Compute the ant's next state from the previous snapshot.
///
/// Never mutates its input. Dead ants come back unchanged.
pub fn step<R: Rng + ?Sized>(
    ant: &Ant,
    world: &Surroundings<'_>,
    config: &BehaviorConfig,
    rng: &mut R,
) -> Ant {
    if ant.is_dead() {
        return ant.clone();
    }

    let mut next = ant.clone();
    match ant.state {
        AntState::Idle => wake(&mut next, config, rng),
        AntState::Exploring => explore(&mut next, world, config, rng),
        AntState::Gathering => gather(&mut next, world, config, rng),
        AntState::Returning => return_home(&mut next, world, config, rng),
        // Reserved states have no rules yet; they only metabolize.
        AntState::Reproducing | AntState::Fleeing | AntState::Fighting | AntState::Dead => {}
    }

    metabolize(next, config)
}

/// Why a dead ant died, judged from its final state.
pub fn death_cause(ant: &Ant) -> Option<DeathCause> {
    if !ant.is_dead() {
        return None;
    }
    if ant.food_level <= 0.0 {
        Some(DeathCause::Starvation)
    } else {
        Some(DeathCause::OldAge)
    }
}

fn wake<R: Rng + ?Sized>(ant: &mut Ant, config: &BehaviorConfig, rng: &mut R) {
    if chance(rng, config.idle_wake_probability) {
        ant.state = AntState::Exploring;
        ant.target = Some(random_point_near(&ant.position, config.wander_radius, rng));
    }
}

fn explore<R: Rng + ?Sized>(
    ant: &mut Ant,
    world: &Surroundings<'_>,
    config: &BehaviorConfig,
    rng: &mut R,
) {
    // First match in scan order, not the nearest.
    let sensed = world.resources.iter().find(|r| {
        r.is_available_food() && ant.position.distance_to(&r.position) < ant.genes.sense_range
    });
    if let Some(resource) = sensed {
        ant.state = AntState::Gathering;
        ant.target = Some(resource.position);
        return;
    }

    if !ant.carrying_food && chance(rng, config.food_trail_follow_probability) {
        let range = ant.genes.sense_range * config.food_trail_range_factor;
        if let Some(trail) = world.scents.strongest(&ant.position, PheromoneType::Food, range) {
            ant.target = Some(trail.pheromone.position);
            if trail.strength > config.food_trail_commit_strength {
                ant.state = AntState::Gathering;
            }
            return;
        }
    }

    if let Some(target) = ant.target {
        if ant.position.distance_to(&target) < config.arrival_radius {
            ant.target = Some(random_point_near(&ant.position, config.wander_radius, rng));
        }
    }
}

fn gather<R: Rng + ?Sized>(
    ant: &mut Ant,
    world: &Surroundings<'_>,
    config: &BehaviorConfig,
    rng: &mut R,
) {
    let Some(colony) = world.colony(&ant.colony) else {
        return;
    };
    let Some(target) = ant.target else {
        return;
    };
    if ant.position.distance_to(&target) >= config.arrival_radius {
        return;
    }

    // The source may have been emptied between sensing and arrival.
    let food_here = world.resources.iter().any(|r| {
        r.is_available_food() && r.position.distance_to(&ant.position) < config.pickup_radius
    });
    if food_here {
        ant.state = AntState::Returning;
        ant.target = Some(colony.position);
        ant.carrying_food = true;
    } else {
        ant.state = AntState::Exploring;
        ant.target = Some(random_point_near(&ant.position, config.wander_radius, rng));
        ant.carrying_food = false;
    }
}

fn return_home<R: Rng + ?Sized>(
    ant: &mut Ant,
    world: &Surroundings<'_>,
    config: &BehaviorConfig,
    rng: &mut R,
) {
    let Some(home) = world.colony(&ant.colony) else {
        return;
    };

    if ant.position.distance_to(&home.position) < config.home_radius {
        if ant.carrying_food {
            ant.food_level =
                (ant.food_level + config.replenish_amount).min(ant.genes.max_food_capacity);
        }
        ant.state = AntState::Exploring;
        ant.target = Some(random_point_near(&ant.position, config.wander_radius, rng));
        ant.carrying_food = false;
        return;
    }

    if chance(rng, config.home_trail_follow_probability) {
        if let Some(trail) =
            world.scents.strongest(&ant.position, PheromoneType::Home, ant.genes.sense_range)
        {
            let home_dir = ant.position.ground_direction_to(&home.position);
            let trail_dir = ant.position.ground_direction_to(&trail.pheromone.position);
            let blend = home_dir * config.home_blend + trail_dir * (1.0 - config.home_blend);
            ant.target = Some(Vector3D::ground(
                ant.position.x + blend.x * config.home_projection,
                ant.position.z + blend.z * config.home_projection,
            ));
            return;
        }
    }

    // A reached trail waypoint is not home; head straight back.
    if let Some(target) = ant.target {
        if ant.position.distance_to(&target) < config.arrival_radius {
            ant.target = Some(home.position);
        }
    }
}

fn metabolize(mut ant: Ant, config: &BehaviorConfig) -> Ant {
    if ant.food_level <= 0.0 {
        ant.food_level = 0.0;
        ant.state = AntState::Dead;
        return ant;
    }

    ant.food_level = (ant.food_level - config.food_consumption_per_tick)
        .clamp(0.0, ant.genes.max_food_capacity);
    ant.age += config.age_per_tick;
    if ant.age > ant.max_age {
        ant.state = AntState::Dead;
    }
    ant
}
