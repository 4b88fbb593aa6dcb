//! Simulation: the tick driver.
//!
//! The driver is the only writer of the current snapshot. Each tick reads
//! the published snapshot and builds the next one from scratch:
//!
//! 1. Scale the real delta by the speed multiplier and advance time
//! 2. Every ant decides against the previous snapshot, then moves
//! 3. Existing deposits decay; moved ants emit new ones
//! 4. Gathering ants deplete resources
//! 5. Ants arriving home with food are credited to their colony
//!
//! Published snapshots are shared behind an `Arc` and never mutated.
//! Commands that touch clock fields copy-on-write if a consumer still
//! holds the old snapshot.

use crate::economy::settle;
use crate::events::TickEvent;
use crate::field::{decay_and_prune, PheromoneField};
use crate::ledger::apply_depletion;
use crate::stats::WorldStats;
use crate::world::build_world;
use formica_agents::behavior::{death_cause, step};
use formica_agents::emission::emit;
use formica_agents::locomotion::advance;
use formica_core::config::SimulationConfig;
use formica_core::error::Result;
use formica_core::field::Surroundings;
use formica_core::rng::{create_rng, derive_seed, SimRng};
use formica_core::types::*;
use std::sync::Arc;
use tracing::{debug, trace};

/// The simulation engine.
pub struct Simulation {
    config: SimulationConfig,
    rng: SimRng,
    state: Arc<SimulationState>,
    last_events: Vec<TickEvent>,
}

impl Simulation {
    /// Create a simulation with the default configuration.
    pub fn new(seed: u64) -> Self {
        let config = SimulationConfig::default();
        let mut rng = create_rng(seed);
        let state = build_world(&config, &mut rng);
        Self::assemble(config, rng, state)
    }

    /// Create a simulation from a user-supplied configuration.
    pub fn from_config(config: SimulationConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = create_rng(seed);
        let state = build_world(&config, &mut rng);
        debug!(
            seed,
            ants = state.ants.len(),
            resources = state.resources.len(),
            "Simulation created"
        );
        Ok(Self::assemble(config, rng, state))
    }

    /// Drive a hand-built world instead of a generated one.
    pub fn with_state(config: SimulationConfig, state: SimulationState, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, create_rng(seed), state))
    }

    fn assemble(config: SimulationConfig, rng: SimRng, state: SimulationState) -> Self {
        Self {
            config,
            rng,
            state: Arc::new(state),
            last_events: Vec::new(),
        }
    }

    /// Advance by `real_dt` seconds scaled by the current speed.
    ///
    /// While paused this is a no-op and returns the current snapshot.
    /// Negative or non-finite deltas count as zero.
    pub fn tick(&mut self, real_dt: f64) -> Arc<SimulationState> {
        if self.state.is_paused {
            self.last_events.clear();
            return Arc::clone(&self.state);
        }

        let prev = Arc::clone(&self.state);
        let real_dt = if real_dt.is_finite() { real_dt.max(0.0) } else { 0.0 };
        let dt = real_dt * prev.speed;
        let time = prev.time + dt;
        let config = &self.config;
        let rng = &mut self.rng;

        // A hand-built world may start with carriers already home. Settle
        // them first so the state machine never drops an uncounted load.
        let pending = settle(
            &prev.colonies,
            prev.ants.clone(),
            &config.economy,
            &config.behavior,
            rng,
        );

        // Sensing sees only the previous snapshot.
        let field = PheromoneField::new(&prev.pheromones, prev.time, &config.pheromone);
        let surroundings = Surroundings {
            colonies: &prev.colonies,
            resources: &prev.resources,
            scents: &field,
        };
        let mut ants = Vec::with_capacity(pending.ants.len());
        for ant in &pending.ants {
            let decided = step(ant, &surroundings, &config.behavior, rng);
            ants.push(advance(decided, dt, &config.behavior, rng));
        }

        let mut pheromones = decay_and_prune(&prev.pheromones, time, &config.pheromone);
        for ant in &ants {
            if let Some(deposit) = emit(ant, time, &config.pheromone, rng) {
                pheromones.push(deposit);
            }
        }

        let resources = apply_depletion(&prev.resources, &ants, &config.economy);
        let settlement = settle(&pending.colonies, ants, &config.economy, &config.behavior, rng);
        let deliveries: Vec<_> = pending
            .deliveries
            .iter()
            .chain(&settlement.deliveries)
            .copied()
            .collect();

        let mut events = Vec::new();
        for (before, after) in prev.ants.iter().zip(&settlement.ants) {
            if before.state == after.state {
                continue;
            }
            events.push(TickEvent::StateChanged {
                id: after.id,
                from: before.state,
                to: after.state,
            });
            if let Some(cause) = death_cause(after) {
                debug!(ant = %after.id, ?cause, age = after.age, "Ant died");
                events.push(TickEvent::Died { id: after.id, cause });
            }
        }
        for (before, after) in prev.resources.iter().zip(&resources) {
            if before.amount > 0.0 && after.amount <= 0.0 {
                events.push(TickEvent::ResourceDepleted { id: after.id });
            }
        }
        events.extend(deliveries.iter().map(|d| TickEvent::Delivered {
            ant: d.ant,
            colony: d.colony,
        }));

        let next = SimulationState {
            generation: prev.generation + 1,
            time,
            speed: prev.speed,
            is_paused: false,
            ants: settlement.ants,
            colonies: settlement.colonies,
            resources,
            pheromones,
            predators: prev.predators.clone(),
            terrain_seed: prev.terrain_seed,
        };

        let alive = next.live_ants().count();
        trace!(
            generation = next.generation,
            dt,
            alive,
            pheromones = next.pheromones.len(),
            deliveries = deliveries.len(),
            "Tick complete"
        );
        events.push(TickEvent::TickComplete {
            generation: next.generation,
            time,
            alive,
            deliveries: deliveries.len(),
        });

        self.last_events = events;
        self.state = Arc::new(next);
        Arc::clone(&self.state)
    }

    /// Run `ticks` ticks of `real_dt` each and return the final snapshot.
    pub fn run(&mut self, ticks: u64, real_dt: f64) -> Arc<SimulationState> {
        for _ in 0..ticks {
            self.tick(real_dt);
        }
        self.snapshot()
    }

    /// Set the speed multiplier, clamped to the configured range.
    pub fn set_speed(&mut self, speed: f64) {
        let speed = self.config.clamp_speed(speed);
        debug!(speed, "Speed changed");
        Arc::make_mut(&mut self.state).speed = speed;
    }

    pub fn pause(&mut self) {
        self.set_paused(true);
    }

    pub fn resume(&mut self) {
        self.set_paused(false);
    }

    /// Flip the pause flag. Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = !self.state.is_paused;
        self.set_paused(paused);
        paused
    }

    fn set_paused(&mut self, paused: bool) {
        if self.state.is_paused == paused {
            return;
        }
        debug!(paused, "Pause toggled");
        Arc::make_mut(&mut self.state).is_paused = paused;
    }

    /// Rebuild the world from the configuration.
    ///
    /// The new world starts paused at the initial speed, with a fresh
    /// population, fresh resources, and no pheromones.
    pub fn reset(&mut self) {
        let seed = derive_seed(&mut self.rng);
        self.rng = create_rng(seed);
        let mut state = build_world(&self.config, &mut self.rng);
        state.is_paused = true;
        state.speed = self.config.clamp_speed(self.config.clock.initial_speed);
        debug!(
            seed,
            ants = state.ants.len(),
            resources = state.resources.len(),
            "Simulation reset"
        );

        self.state = Arc::new(state);
        self.last_events.clear();
    }

    /// The current snapshot. Cheap: clones the `Arc`.
    pub fn snapshot(&self) -> Arc<SimulationState> {
        Arc::clone(&self.state)
    }

    /// Borrow the current snapshot without bumping the refcount.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Events from the most recent tick.
    pub fn last_events(&self) -> &[TickEvent] {
        &self.last_events
    }

    pub fn stats(&self) -> WorldStats {
        WorldStats::from_state(&self.state)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_time_by_scaled_delta() {
        let mut sim = Simulation::new(1);
        sim.set_speed(2.0);
        let state = sim.tick(0.5);
        assert!((state.time - 1.0).abs() < 1e-12);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn paused_tick_returns_same_snapshot() {
        let mut sim = Simulation::new(2);
        sim.tick(0.1);
        sim.pause();
        let before = sim.snapshot();
        let after = sim.tick(1.0);
        assert!(Arc::ptr_eq(&before, &after));
        assert!(sim.last_events().is_empty());
    }

    #[test]
    fn speed_is_clamped() {
        let mut sim = Simulation::new(3);
        sim.set_speed(100.0);
        assert_eq!(sim.state().speed, 10.0);
        sim.set_speed(0.0);
        assert_eq!(sim.state().speed, 0.1);
    }

    #[test]
    fn toggle_pause_flips() {
        let mut sim = Simulation::new(4);
        assert!(!sim.state().is_paused);
        assert!(sim.toggle_pause());
        assert!(!sim.toggle_pause());
    }

    #[test]
    fn commands_do_not_touch_published_snapshots() {
        let mut sim = Simulation::new(5);
        let held = sim.snapshot();
        sim.set_speed(4.0);
        sim.pause();
        assert_eq!(held.speed, 1.0);
        assert!(!held.is_paused);
        assert_eq!(sim.state().speed, 4.0);
    }

    #[test]
    fn reset_restores_initial_world_paused() {
        let mut sim = Simulation::new(6);
        sim.set_speed(5.0);
        sim.run(50, 0.1);
        sim.reset();

        let state = sim.state();
        assert!(state.is_paused);
        assert_eq!(state.speed, 1.0);
        assert_eq!(state.time, 0.0);
        assert_eq!(state.generation, 0);
        assert_eq!(state.colonies.len(), 1);
        assert_eq!(state.colonies[0].food_stored, 200.0);
        assert_eq!(state.ants.len(), 20);
        assert!(state.pheromones.is_empty());
    }

    #[test]
    fn every_tick_ends_with_tick_complete() {
        let mut sim = Simulation::new(7);
        sim.tick(0.1);
        let last = sim.last_events().last().unwrap();
        assert!(last.is_tick_complete());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = SimulationConfig::default();
        config.pheromone.lifetime = 0.0;
        assert!(Simulation::from_config(config, 1).is_err());

        let mut config = SimulationConfig::default();
        config.world.terrain_size = f64::INFINITY;
        assert!(Simulation::from_config(config, 1).is_err());

        let mut config = SimulationConfig::default();
        config.behavior.wander_radius = f64::INFINITY;
        assert!(Simulation::from_config(config, 1).is_err());
    }

    #[test]
    fn bad_deltas_count_as_zero() {
        let mut sim = Simulation::new(8);
        assert_eq!(sim.tick(-1.0).time, 0.0);
        assert_eq!(sim.tick(f64::NAN).time, 0.0);
        assert_eq!(sim.state().generation, 2);
    }
}
