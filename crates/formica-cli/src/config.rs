//! Configuration loading for the Formica CLI.
//!
//! The CLI reads the engine's `SimulationConfig` from TOML. Every table
//! and key is optional; missing values fall back to the engine defaults.

use anyhow::{Context, Result};
use formica::prelude::SimulationConfig;
use std::path::{Path, PathBuf};

/// File name looked up in the current and parent directories.
pub const CONFIG_FILE: &str = "formica.toml";

/// Parse and validate a TOML document.
pub fn parse(content: &str) -> Result<SimulationConfig> {
    let config: SimulationConfig = toml::from_str(content).context("Failed to parse config")?;
    config.validate().context("Invalid config")?;
    Ok(config)
}

/// Load the config from `path`, or from the nearest `formica.toml`, or
/// fall back to defaults.
pub fn load(path: Option<&Path>) -> Result<SimulationConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match find_config_file() {
            Some(found) => found,
            None => return Ok(SimulationConfig::default()),
        },
    };
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    parse(&content).with_context(|| format!("In {}", path.display()))
}

/// Save `config` to `path` as TOML.
pub fn save(config: &SimulationConfig, path: &Path) -> Result<()> {
    let content = to_toml(config)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    Ok(())
}

pub fn to_toml(config: &SimulationConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

/// Find formica.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}
