//! World statistics computed from a snapshot.
//!
//! These feed the host's statistics panel. They are derived on demand and
//! never stored in the snapshot.

use formica_core::types::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Live ants per behavioral state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StateCounts {
    pub idle: usize,
    pub exploring: usize,
    pub gathering: usize,
    pub returning: usize,
    /// Reproducing, fleeing and fighting combined.
    pub reserved: usize,
}

impl StateCounts {
    fn record(&mut self, state: AntState) {
        if state.is_reserved() {
            self.reserved += 1;
            return;
        }
        match state {
            AntState::Idle => self.idle += 1,
            AntState::Exploring => self.exploring += 1,
            AntState::Gathering => self.gathering += 1,
            AntState::Returning => self.returning += 1,
            _ => {}
        }
    }
}

/// Per-colony summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColonyDetails {
    pub id: ColonyId,
    pub food_stored: f64,
    /// Live ants belonging to the colony.
    pub alive: usize,
    pub states: StateCounts,
}

/// Aggregate statistics for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldStats {
    pub generation: u64,
    pub time: SimTime,
    pub live_ants: usize,
    pub dead_ants: usize,
    pub pheromones: usize,
    /// Food remaining across all food resources.
    pub total_food: f64,
    pub total_water: f64,
    pub states: StateCounts,
    /// Live ants keyed by generation number.
    pub generations: BTreeMap<u32, usize>,
    /// Mean age of live ants; zero when none are alive.
    pub average_age: f64,
    pub colonies: Vec<ColonyDetails>,
}

impl WorldStats {
    pub fn from_state(state: &SimulationState) -> Self {
        let mut states = StateCounts::default();
        let mut generations = BTreeMap::new();
        let mut age_sum = 0.0;
        let mut live = 0usize;

        for ant in state.live_ants() {
            live += 1;
            age_sum += ant.age;
            states.record(ant.state);
            *generations.entry(ant.generation).or_insert(0) += 1;
        }

        let total_of = |kind: ResourceType| -> f64 {
            state
                .resources
                .iter()
                .filter(|r| r.resource_type == kind)
                .map(|r| r.amount)
                .sum()
        };

        let colonies = state
            .colonies
            .iter()
            .map(|colony| {
                let mut colony_states = StateCounts::default();
                let mut alive = 0;
                for ant in state.live_ants().filter(|a| a.colony == colony.id) {
                    alive += 1;
                    colony_states.record(ant.state);
                }
                ColonyDetails {
                    id: colony.id,
                    food_stored: colony.food_stored,
                    alive,
                    states: colony_states,
                }
            })
            .collect();

        Self {
            generation: state.generation,
            time: state.time,
            live_ants: live,
            dead_ants: state.ants.len() - live,
            pheromones: state.pheromones.len(),
            total_food: total_of(ResourceType::Food),
            total_water: total_of(ResourceType::Water),
            states,
            generations,
            average_age: if live == 0 { 0.0 } else { age_sum / live as f64 },
            colonies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::build_world;
    use formica_core::config::SimulationConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn fresh_world_stats() {
        let mut rng = ChaCha12Rng::seed_from_u64(3);
        let state = build_world(&SimulationConfig::default(), &mut rng);
        let stats = WorldStats::from_state(&state);

        assert_eq!(stats.live_ants, 20);
        assert_eq!(stats.dead_ants, 0);
        assert_eq!(stats.states.exploring, 20);
        assert_eq!(stats.generations.get(&1), Some(&20));
        assert_eq!(stats.average_age, 0.0);
        assert_eq!(stats.colonies.len(), 1);
        assert_eq!(stats.colonies[0].alive, 20);
        assert_eq!(stats.colonies[0].food_stored, 200.0);
        assert!(stats.total_food > 0.0);
    }

    #[test]
    fn dead_ants_are_counted_separately() {
        let mut rng = ChaCha12Rng::seed_from_u64(4);
        let mut state = build_world(&SimulationConfig::default(), &mut rng);
        state.ants[0].state = AntState::Dead;
        state.ants[1].state = AntState::Fleeing;
        state.ants[1].age = 20.0;

        let stats = WorldStats::from_state(&state);
        assert_eq!(stats.live_ants, 19);
        assert_eq!(stats.dead_ants, 1);
        assert_eq!(stats.states.reserved, 1);
        assert!((stats.average_age - 20.0 / 19.0).abs() < 1e-12);
        assert_eq!(stats.colonies[0].alive, 19);
    }

    #[test]
    fn stats_serialize_for_the_host() {
        let mut rng = ChaCha12Rng::seed_from_u64(5);
        let state = build_world(&SimulationConfig::default(), &mut rng);
        let json = serde_json::to_value(WorldStats::from_state(&state)).unwrap();
        assert_eq!(json["live_ants"], 20);
        assert_eq!(json["generations"]["1"], 20);
        assert_eq!(json["states"]["exploring"], 20);
    }

    #[test]
    fn empty_world_has_zero_average_age() {
        let stats = WorldStats::from_state(&SimulationState::empty());
        assert_eq!(stats.live_ants, 0);
        assert_eq!(stats.average_age, 0.0);
        assert!(stats.colonies.is_empty());
    }
}
