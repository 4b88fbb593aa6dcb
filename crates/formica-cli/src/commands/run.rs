//! Run the simulation headless for a fixed number of ticks.

use anyhow::Result;
use colored::Colorize;
use formica::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

pub struct RunOptions {
    pub ticks: u64,
    /// Real seconds fed to each tick.
    pub delta: f64,
    pub speed: f64,
    pub seed: u64,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub verbose: bool,
}

/// Event totals over a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub deliveries: usize,
    pub deaths: usize,
    pub starved: usize,
    pub depleted: usize,
}

impl Tally {
    pub fn record(&mut self, events: &[TickEvent]) {
        for event in events {
            match event {
                TickEvent::Delivered { .. } => self.deliveries += 1,
                TickEvent::Died { cause, .. } => {
                    self.deaths += 1;
                    if *cause == DeathCause::Starvation {
                        self.starved += 1;
                    }
                }
                TickEvent::ResourceDepleted { .. } => self.depleted += 1,
                _ => {}
            }
        }
    }
}

#[derive(Serialize)]
struct Report {
    seed: u64,
    ticks: u64,
    tally: Tally,
    stats: WorldStats,
}

pub fn run(opts: RunOptions) -> Result<()> {
    let config = crate::config::load(opts.config.as_deref())?;
    let mut sim = Simulation::from_config(config, opts.seed)?;
    sim.set_speed(opts.speed);
    if sim.state().is_paused {
        sim.resume();
    }
    info!(seed = opts.seed, ticks = opts.ticks, speed = sim.state().speed, "Starting run");

    let initial = sim.stats();
    if !opts.json {
        println!(
            "{} Running {} ticks (seed {}, speed {})...",
            "→".blue(),
            opts.ticks.to_string().cyan(),
            opts.seed.to_string().cyan(),
            sim.state().speed.to_string().cyan()
        );
    }

    let pb = if opts.json { ProgressBar::hidden() } else { ProgressBar::new(opts.ticks) };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ticks")?
            .progress_chars("#>-"),
    );

    let mut tally = Tally::default();
    for _ in 0..opts.ticks {
        sim.tick(opts.delta);
        let events = sim.last_events();
        tally.record(events);
        if opts.verbose {
            let notable = events
                .iter()
                .filter(|e| matches!(e, TickEvent::Delivered { .. } | TickEvent::Died { .. }));
            for event in notable {
                pb.println(format!("  {:?}", event));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let stats = sim.stats();
    if opts.json {
        let report = Report {
            seed: opts.seed,
            ticks: opts.ticks,
            tally,
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&initial, &stats, &tally);
    Ok(())
}

fn print_summary(initial: &WorldStats, stats: &WorldStats, tally: &Tally) {
    println!();
    println!("{} Simulation complete!", "✓".green().bold());
    println!("  Simulated time: {}", format!("{:.2}", stats.time).cyan());
    println!(
        "  Ants alive:     {} → {}",
        initial.live_ants.to_string().yellow(),
        stats.live_ants.to_string().green()
    );
    println!(
        "  Food in world:  {} → {}",
        format!("{:.1}", initial.total_food).yellow(),
        format!("{:.1}", stats.total_food).green()
    );
    println!("  Pheromones:     {}", stats.pheromones.to_string().cyan());
    println!(
        "  Deaths:         {} ({} starved)",
        tally.deaths.to_string().red(),
        tally.starved
    );
    println!("  Depleted:       {}", tally.depleted.to_string().cyan());

    println!();
    println!("{}", "States".blue().bold());
    println!("  idle       {}", stats.states.idle);
    println!("  exploring  {}", stats.states.exploring);
    println!("  gathering  {}", stats.states.gathering);
    println!("  returning  {}", stats.states.returning);

    for colony in &stats.colonies {
        println!();
        println!("{} {}", "Colony".blue().bold(), colony.id.to_string().dimmed());
        println!(
            "  Food stored:  {} (+{} delivered)",
            format!("{:.1}", colony.food_stored).green(),
            tally.deliveries
        );
        println!("  Alive:        {}", colony.alive);
    }
}
