//! Hand-built worlds driven through the full tick pipeline.

use formica_core::config::{PheromoneConfig, SimulationConfig};
use formica_core::field::ScentField;
use formica_core::types::*;
use formica_runtime::events::TickEvent;
use formica_runtime::field::PheromoneField;
use formica_runtime::simulation::Simulation;

fn home() -> Colony {
    Colony {
        id: ColonyId::from_seed(1),
        position: Vector3D::ground(0.0, 0.0),
        food_stored: 0.0,
        population: 1,
        queens: 0,
        workers: 1,
        soldiers: 0,
    }
}

fn worker(position: Vector3D, target: Option<Vector3D>) -> Ant {
    Ant {
        id: AntId::from_seed(1),
        position,
        heading: 0.0,
        speed: 1.0,
        health: 100.0,
        food_level: 80.0,
        colony: ColonyId::from_seed(1),
        state: AntState::Exploring,
        target,
        carrying_food: false,
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

fn world(ants: Vec<Ant>, resources: Vec<Resource>, pheromones: Vec<Pheromone>) -> SimulationState {
    SimulationState {
        ants,
        colonies: vec![home()],
        resources,
        pheromones,
        ..SimulationState::empty()
    }
}

#[test]
fn single_forager_delivers_once() {
    let food_spot = Vector3D::ground(3.0, 0.0);
    let food = Resource {
        id: ResourceId::from_seed(1),
        position: food_spot,
        resource_type: ResourceType::Food,
        amount: 100.0,
    };
    let state = world(vec![worker(Vector3D::ZERO, Some(food_spot))], vec![food], vec![]);
    let mut sim = Simulation::with_state(SimulationConfig::default(), state, 21).unwrap();

    let mut seen = Vec::new();
    let mut delivered_at = None;
    for tick in 0..200 {
        let before = sim.state().colonies[0].food_stored;
        let next = sim.tick(0.5);
        let ant = &next.ants[0];
        if seen.last() != Some(&ant.state) {
            seen.push(ant.state);
        }

        let delivered = sim
            .last_events()
            .iter()
            .any(|e| matches!(e, TickEvent::Delivered { .. }));
        if delivered {
            assert_eq!(next.colonies[0].food_stored - before, 1.0);
            assert_eq!(ant.state, AntState::Exploring);
            assert!(!ant.carrying_food);
            delivered_at = Some(tick);
            break;
        }
        assert_eq!(next.colonies[0].food_stored, before);
    }

    assert!(delivered_at.is_some(), "forager never delivered");
    assert_eq!(
        &seen[..3],
        &[AntState::Gathering, AntState::Returning, AntState::Exploring]
    );
    assert!(sim.state().resources[0].amount < 100.0);
}

#[test]
fn carrier_placed_at_home_is_credited() {
    let mut ant = worker(Vector3D::ground(0.8, 0.0), Some(Vector3D::ZERO));
    ant.state = AntState::Returning;
    ant.carrying_food = true;
    let state = world(vec![ant], vec![], vec![]);
    let mut sim = Simulation::with_state(SimulationConfig::default(), state, 26).unwrap();

    let next = sim.tick(0.1);
    assert_eq!(next.ants[0].state, AntState::Exploring);
    assert!(!next.ants[0].carrying_food);
    assert_eq!(next.colonies[0].food_stored, 1.0);
    let delivered = sim
        .last_events()
        .iter()
        .filter(|e| matches!(e, TickEvent::Delivered { .. }))
        .count();
    assert_eq!(delivered, 1);
}

#[test]
fn deposit_decays_then_disappears() {
    let deposit = Pheromone {
        id: PheromoneId::from_seed(1),
        position: Vector3D::ground(10.0, 10.0),
        pheromone_type: PheromoneType::Food,
        initial_strength: 0.8,
        strength: 0.8,
        created_at: 0.0,
    };
    let state = world(vec![], vec![], vec![deposit]);
    let mut sim = Simulation::with_state(SimulationConfig::default(), state, 22).unwrap();
    let config = PheromoneConfig::default();

    let at_15 = sim.tick(15.0);
    assert_eq!(at_15.pheromones.len(), 1);
    assert!((at_15.pheromones[0].strength - 0.4).abs() < 1e-12);
    let field = PheromoneField::new(&at_15.pheromones, at_15.time, &config);
    let found = field
        .strongest(&Vector3D::ground(10.0, 10.0), PheromoneType::Food, 3.0)
        .unwrap();
    assert!((found.strength - 0.4).abs() < 1e-12);

    let at_31 = sim.tick(16.0);
    assert!(at_31.pheromones.is_empty());
    let field = PheromoneField::new(&at_31.pheromones, at_31.time, &config);
    assert!(field
        .strongest(&Vector3D::ground(10.0, 10.0), PheromoneType::Food, 3.0)
        .is_none());
}

#[test]
fn old_ant_dies_on_next_tick() {
    let mut ant = worker(Vector3D::ground(20.0, 20.0), None);
    ant.age = ant.max_age - 1e-6;
    let state = world(vec![ant], vec![], vec![]);
    let mut sim = Simulation::with_state(SimulationConfig::default(), state, 23).unwrap();

    let next = sim.tick(0.1);
    assert_eq!(next.ants[0].state, AntState::Dead);
    assert!(sim
        .last_events()
        .iter()
        .any(|e| matches!(e, TickEvent::Died { cause: DeathCause::OldAge, .. })));

    // Still present, frozen.
    let frozen = next.ants[0].clone();
    let later = sim.run(10, 0.1);
    assert_eq!(later.ants.len(), 1);
    assert_eq!(later.ants[0], frozen);
}

#[test]
fn dangling_colony_is_skipped() {
    let mut ant = worker(Vector3D::ground(3.0, 0.0), Some(Vector3D::ground(3.0, 0.0)));
    ant.state = AntState::Gathering;
    ant.colony = ColonyId::from_seed(404);
    let food = Resource {
        id: ResourceId::from_seed(1),
        position: Vector3D::ground(3.0, 0.0),
        resource_type: ResourceType::Food,
        amount: 100.0,
    };
    let state = world(vec![ant], vec![food], vec![]);
    let mut sim = Simulation::with_state(SimulationConfig::default(), state, 24).unwrap();

    let next = sim.tick(0.1);
    assert_eq!(next.ants[0].state, AntState::Gathering);
    assert!(!next.ants[0].carrying_food);
}

#[test]
fn reset_builds_configured_colony() {
    let mut config = SimulationConfig::default();
    config.world.workers = 6;
    config.world.soldiers = 2;
    config.world.queens = 1;
    config.world.starting_food = 75.0;
    let mut sim = Simulation::from_config(config, 25).unwrap();

    for _ in 0..3 {
        sim.set_speed(8.0);
        sim.run(100, 0.1);
        sim.reset();

        let state = sim.state();
        assert_eq!(state.colonies.len(), 1);
        assert_eq!(state.colonies[0].food_stored, 75.0);
        assert_eq!(state.colonies[0].population, 9);
        assert_eq!(state.ants.len(), 9);
        assert!(state.ants.iter().all(|a| a.state == AntState::Exploring));
        assert!(state.pheromones.is_empty());
        assert!(state.is_paused);
        assert_eq!(state.speed, 1.0);
        sim.resume();
    }
}
