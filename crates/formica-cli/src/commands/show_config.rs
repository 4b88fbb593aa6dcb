//! Print the default configuration.

use anyhow::Result;
use formica::prelude::SimulationConfig;

pub fn run() -> Result<()> {
    print!("{}", crate::config::to_toml(&SimulationConfig::default())?);
    Ok(())
}
