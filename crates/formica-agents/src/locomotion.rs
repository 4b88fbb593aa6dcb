//! Locomotion: moves an ant toward its target on the ground plane.

use formica_core::config::BehaviorConfig;
use formica_core::geometry::{heading_of, random_point_near};
use formica_core::types::*;
use rand::Rng;

/// Integrate one step of movement over `dt` simulated time units.
///
/// Dead ants are returned unchanged. An exploring ant without a target
/// picks a wander target first. Travel is capped at the remaining
/// distance, so an ant lands on its target instead of overshooting.
pub fn advance<R: Rng + ?Sized>(
    mut ant: Ant,
    dt: f64,
    config: &BehaviorConfig,
    rng: &mut R,
) -> Ant {
    if ant.is_dead() {
        return ant;
    }

    if ant.target.is_none() && ant.state == AntState::Exploring {
        ant.target = Some(random_point_near(&ant.position, config.wander_radius, rng));
    }
    let Some(target) = ant.target else {
        return ant;
    };

    let direction = ant.position.ground_direction_to(&target);
    let remaining = Vector3D::ground(target.x - ant.position.x, target.z - ant.position.z).length();
    let travel = (ant.speed * dt).max(0.0).min(remaining);
    if travel > 0.0 {
        ant.position = Vector3D::ground(
            ant.position.x + direction.x * travel,
            ant.position.z + direction.z * travel,
        );
        ant.heading = heading_of(&direction);
    }

    let arrived = ant.position.distance_to(&target) < config.arrival_radius;
    if arrived && ant.state == AntState::Exploring {
        ant.target = Some(random_point_near(&ant.position, config.wander_radius, rng));
    }

    ant
}
