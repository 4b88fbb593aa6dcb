//! Genes: role-based sampling at hatch time and mutation on inheritance.
//!
//! Role defaults:
//!
//! | Role    | speed      | strength | sense range | max health | capacity |
//! |---------|------------|----------|-------------|------------|----------|
//! | worker  | 1.0..1.5   | 1        | 5..7        | 100        | 100      |
//! | soldier | 1.5..2.0   | 3..4     | 7..9        | 200        | 60       |
//! | queen   | 0.5        | 1        | 3           | 300        | 150      |

use formica_core::config::WorldConfig;
use formica_core::rng::chance;
use formica_core::types::*;
use rand::Rng;

/// Default chance that each gene mutates in an offspring.
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

/// Sample genes for a freshly hatched ant of `role`.
pub fn sample_genes<R: Rng + ?Sized>(role: AntRole, rng: &mut R) -> AntGenes {
    match role {
        AntRole::Worker => AntGenes {
            speed: 1.0 + rng.random::<f64>() * 0.5,
            strength: 1.0,
            sense_range: 5.0 + rng.random::<f64>() * 2.0,
            max_health: 100.0,
            max_food_capacity: 100.0,
        },
        AntRole::Soldier => AntGenes {
            speed: 1.5 + rng.random::<f64>() * 0.5,
            strength: 3.0 + rng.random::<f64>(),
            sense_range: 7.0 + rng.random::<f64>() * 2.0,
            max_health: 200.0,
            max_food_capacity: 60.0,
        },
        AntRole::Queen => AntGenes {
            speed: 0.5,
            strength: 1.0,
            sense_range: 3.0,
            max_health: 300.0,
            max_food_capacity: 150.0,
        },
    }
}

/// Role of the `index`-th hatched ant: workers first, then soldiers,
/// then queens for the remainder.
pub fn role_for_index(index: u32, world: &WorldConfig) -> AntRole {
    if index < world.workers {
        AntRole::Worker
    } else if index < world.workers + world.soldiers {
        AntRole::Soldier
    } else {
        AntRole::Queen
    }
}

/// Copy of `genes` where each gene is scaled by `U(0.9, 1.1)` with
/// probability `rate`.
pub fn mutate<R: Rng + ?Sized>(genes: &AntGenes, rate: f64, rng: &mut R) -> AntGenes {
    let mut jitter = |value: f64| {
        if chance(rng, rate) {
            value * rng.random_range(0.9..1.1)
        } else {
            value
        }
    };
    AntGenes {
        speed: jitter(genes.speed),
        strength: jitter(genes.strength),
        sense_range: jitter(genes.sense_range),
        max_health: jitter(genes.max_health),
        max_food_capacity: jitter(genes.max_food_capacity),
    }
}

/// A child of `parent`, one generation later, standing where the parent
/// stands.
///
/// Not called by the tick driver; hosts that add reproduction use it.
pub fn create_offspring<R: Rng + ?Sized>(parent: &Ant, mutation_rate: f64, rng: &mut R) -> Ant {
    let genes = mutate(&parent.genes, mutation_rate, rng);
    let max_age = parent.max_age * rng.random_range(0.9..1.1);
    Ant {
        id: AntId::from_rng(rng),
        position: parent.position,
        heading: 0.0,
        speed: genes.speed,
        health: genes.max_health,
        food_level: genes.max_food_capacity / 2.0,
        colony: parent.colony,
        state: AntState::Exploring,
        target: None,
        carrying_food: false,
        genes,
        generation: parent.generation + 1,
        age: 0.0,
        max_age,
    }
}
