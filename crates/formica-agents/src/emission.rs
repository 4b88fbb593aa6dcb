//! Pheromone emission rule.
//!
//! Each live ant may leave at most one deposit per tick, at its
//! post-movement position. Carriers lay FOOD trails, returning ants lay
//! HOME trails, and everyone else leaves faint incidental marks.

use formica_core::config::PheromoneConfig;
use formica_core::rng::chance;
use formica_core::types::*;
use rand::Rng;

/// What an ant would deposit, before the coin flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deposit {
    pub pheromone_type: PheromoneType,
    pub probability: f64,
    /// Boosted strength, capped at 1.
    pub strength: f64,
}

/// The deposit rule for an ant in its current state, or `None` if dead.
pub fn deposit_for(ant: &Ant, config: &PheromoneConfig) -> Option<Deposit> {
    if ant.is_dead() {
        return None;
    }

    let (pheromone_type, probability, strength) = if ant.carrying_food {
        (
            PheromoneType::Food,
            config.carrying_probability,
            config.carrying_strength * config.food_carry_boost,
        )
    } else if ant.state == AntState::Returning {
        (
            PheromoneType::Home,
            config.returning_probability,
            config.returning_strength * config.home_return_boost,
        )
    } else {
        let kind = if ant.state == AntState::Gathering {
            PheromoneType::Food
        } else {
            PheromoneType::Home
        };
        (kind, config.ambient_probability, config.ambient_strength)
    };

    Some(Deposit {
        pheromone_type,
        probability,
        strength: strength.min(1.0),
    })
}

/// Roll for a deposit from `ant` at time `now`.
pub fn emit<R: Rng + ?Sized>(
    ant: &Ant,
    now: SimTime,
    config: &PheromoneConfig,
    rng: &mut R,
) -> Option<Pheromone> {
    let deposit = deposit_for(ant, config)?;
    if !chance(rng, deposit.probability) {
        return None;
    }
    Some(Pheromone {
        id: PheromoneId::from_rng(rng),
        position: ant.position,
        pheromone_type: deposit.pheromone_type,
        initial_strength: deposit.strength,
        strength: deposit.strength,
        created_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn ant(state: AntState, carrying_food: bool) -> Ant {
        Ant {
            id: AntId::from_seed(1),
            position: Vector3D::ground(4.0, -2.0),
            heading: 0.0,
            speed: 1.0,
            health: 100.0,
            food_level: 50.0,
            colony: ColonyId::from_seed(1),
            state,
            target: None,
            carrying_food,
            genes: AntGenes {
                speed: 1.0,
                strength: 1.0,
                sense_range: 5.0,
                max_health: 100.0,
                max_food_capacity: 100.0,
            },
            generation: 1,
            age: 0.0,
            max_age: 200.0,
        }
    }

    #[test]
    fn carriers_lay_food_trails() {
        let d = deposit_for(&ant(AntState::Returning, true), &PheromoneConfig::default()).unwrap();
        assert_eq!(d.pheromone_type, PheromoneType::Food);
        assert_eq!(d.probability, 0.3);
        // 1.0 × 1.5 capped.
        assert_eq!(d.strength, 1.0);
    }

    #[test]
    fn returning_without_food_lays_home_trail() {
        let d = deposit_for(&ant(AntState::Returning, false), &PheromoneConfig::default()).unwrap();
        assert_eq!(d.pheromone_type, PheromoneType::Home);
        assert_eq!(d.probability, 0.25);
        assert_eq!(d.strength, 1.0);
    }

    #[test]
    fn ambient_deposits_depend_on_state() {
        let config = PheromoneConfig::default();
        let gathering = deposit_for(&ant(AntState::Gathering, false), &config).unwrap();
        assert_eq!(gathering.pheromone_type, PheromoneType::Food);
        assert_eq!(gathering.strength, 0.4);

        let exploring = deposit_for(&ant(AntState::Exploring, false), &config).unwrap();
        assert_eq!(exploring.pheromone_type, PheromoneType::Home);
        assert_eq!(exploring.probability, 0.08);
    }

    #[test]
    fn unboosted_strength_is_kept() {
        let mut config = PheromoneConfig::default();
        config.returning_strength = 0.5;
        let d = deposit_for(&ant(AntState::Returning, false), &config).unwrap();
        assert!((d.strength - 0.65).abs() < 1e-12);
    }

    #[test]
    fn dead_ants_never_emit() {
        let mut config = PheromoneConfig::default();
        config.ambient_probability = 1.0;
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        assert!(emit(&ant(AntState::Dead, false), 0.0, &config, &mut rng).is_none());
    }

    #[test]
    fn emitted_deposit_sits_at_ant() {
        let mut config = PheromoneConfig::default();
        config.carrying_probability = 1.0;
        let mut rng = ChaCha12Rng::seed_from_u64(2);
        let a = ant(AntState::Returning, true);
        let p = emit(&a, 12.5, &config, &mut rng).unwrap();
        assert_eq!(p.position, a.position);
        assert_eq!(p.created_at, 12.5);
        assert_eq!(p.initial_strength, p.strength);
        assert!(p.strength > 0.0 && p.strength <= 1.0);
    }

    #[test]
    fn never_emits_danger() {
        let mut config = PheromoneConfig::default();
        config.ambient_probability = 1.0;
        config.carrying_probability = 1.0;
        config.returning_probability = 1.0;
        let mut rng = ChaCha12Rng::seed_from_u64(3);
        for state in AntState::ALL {
            for carrying in [false, true] {
                if let Some(p) = emit(&ant(state, carrying), 0.0, &config, &mut rng) {
                    assert_ne!(p.pheromone_type, PheromoneType::Danger);
                }
            }
        }
    }
}
