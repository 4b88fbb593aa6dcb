//! Write a starter formica.toml.

use anyhow::{Context, Result};
use colored::Colorize;
use formica::prelude::SimulationConfig;
use std::path::PathBuf;

use crate::config::{save, CONFIG_FILE};

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let base_path = match path {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = base_path.join(CONFIG_FILE);
    if config_path.exists() {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
        return Ok(());
    }

    save(&SimulationConfig::default(), &config_path)?;
    println!("  {} Created {}", "✓".green(), config_path.display());
    println!();
    println!("Next steps:");
    println!("  {} edit {} to tune the colony", "1.".blue(), CONFIG_FILE);
    println!("  {} formica run --ticks 1000", "2.".blue());

    Ok(())
}
