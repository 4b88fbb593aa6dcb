//! Resource ledger: depletion by gathering ants.

use formica_core::config::EconomyConfig;
use formica_core::types::*;

/// Number of gathering ants whose target sits on `resource`.
pub fn gatherers_at(resource: &Resource, ants: &[Ant], config: &EconomyConfig) -> usize {
    ants.iter()
        .filter(|a| a.state == AntState::Gathering)
        .filter(|a| {
            a.target
                .is_some_and(|t| t.within_per_axis(&resource.position, config.gather_tolerance))
        })
        .count()
}

/// Next amounts for every resource given the post-movement ant set.
///
/// Each gathering ant takes `depletion_rate` per tick. Several ants on the
/// same deposit add up; amounts never go below zero.
pub fn apply_depletion(
    resources: &[Resource],
    ants: &[Ant],
    config: &EconomyConfig,
) -> Vec<Resource> {
    resources
        .iter()
        .map(|resource| {
            if resource.is_depleted() {
                return resource.clone();
            }
            let gatherers = gatherers_at(resource, ants, config);
            if gatherers == 0 {
                return resource.clone();
            }
            Resource {
                amount: (resource.amount - config.depletion_rate * gatherers as f64).max(0.0),
                ..resource.clone()
            }
        })
        .collect()
}
