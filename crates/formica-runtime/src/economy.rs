//! Colony economy: credits colonies for food carried home.

use formica_core::config::{BehaviorConfig, EconomyConfig};
use formica_core::geometry::random_point_near;
use formica_core::types::*;
use rand::Rng;
use tracing::info;

/// One ant handing in its load at its colony.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delivery {
    pub ant: AntId,
    pub colony: ColonyId,
}

/// Result of settling one tick's deliveries.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub colonies: Vec<Colony>,
    pub ants: Vec<Ant>,
    pub deliveries: Vec<Delivery>,
}

fn is_delivering(ant: &Ant, colony: &Colony, config: &EconomyConfig) -> bool {
    ant.state == AntState::Returning
        && ant.carrying_food
        && ant.colony == colony.id
        && ant.position.distance_to(&colony.position) < config.delivery_radius
}

/// Credit every colony once per ant arriving home with food, and send
/// those ants back out exploring.
///
/// Each ant is flipped as it is counted, so it cannot be credited twice.
pub fn settle<R: Rng + ?Sized>(
    colonies: &[Colony],
    mut ants: Vec<Ant>,
    economy: &EconomyConfig,
    behavior: &BehaviorConfig,
    rng: &mut R,
) -> Settlement {
    let mut deliveries = Vec::new();
    let mut next_colonies = Vec::with_capacity(colonies.len());

    for colony in colonies {
        let mut delivered = 0usize;
        for ant in ants.iter_mut().filter(|a| is_delivering(a, colony, economy)) {
            ant.state = AntState::Exploring;
            ant.carrying_food = false;
            ant.target = Some(random_point_near(&ant.position, behavior.wander_radius, rng));
            deliveries.push(Delivery { ant: ant.id, colony: colony.id });
            delivered += 1;
        }

        let mut next = colony.clone();
        if delivered > 0 {
            next.food_stored += economy.food_per_delivery * delivered as f64;
            info!(
                colony = %colony.id,
                delivered,
                food_stored = next.food_stored,
                "Colony credited"
            );
        }
        next_colonies.push(next);
    }

    Settlement {
        colonies: next_colonies,
        ants,
        deliveries,
    }
}
