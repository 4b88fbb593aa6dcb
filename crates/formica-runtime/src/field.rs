//! Pheromone field: linear-scan implementation of `ScentField`.
//!
//! Deposits are stored as a plain slice. Queries compute the decayed
//! strength of each candidate at the view's time, so a snapshot can be
//! queried at any instant without mutating it.

use formica_core::config::PheromoneConfig;
use formica_core::field::{ScentField, ScentMatch};
use formica_core::types::*;

/// Read-only view over a snapshot's deposits at a fixed time.
pub struct PheromoneField<'a> {
    deposits: &'a [Pheromone],
    now: SimTime,
    lifetime: f64,
    detection_threshold: f64,
}

impl<'a> PheromoneField<'a> {
    pub fn new(deposits: &'a [Pheromone], now: SimTime, config: &PheromoneConfig) -> Self {
        Self {
            deposits,
            now,
            lifetime: config.lifetime,
            detection_threshold: config.detection_threshold,
        }
    }

    /// Effective strength of `pheromone` at the view's time.
    pub fn strength_of(&self, pheromone: &Pheromone) -> f64 {
        pheromone.strength_at(self.now, self.lifetime)
    }

    pub fn deposits(&self) -> &'a [Pheromone] {
        self.deposits
    }
}

impl ScentField for PheromoneField<'_> {
    fn strongest(
        &self,
        position: &Vector3D,
        kind: PheromoneType,
        range: f64,
    ) -> Option<ScentMatch<'_>> {
        if range <= 0.0 {
            return None;
        }

        let mut best: Option<(ScentMatch<'_>, f64)> = None;
        for pheromone in self.deposits.iter().filter(|p| p.pheromone_type == kind) {
            let distance = pheromone.position.distance_to(position);
            if distance > range {
                continue;
            }
            let strength = self.strength_of(pheromone);
            if strength <= self.detection_threshold {
                continue;
            }
            let score = strength * (1.0 - distance / range);
            // Strict comparison: the first of equal scores wins.
            if best.as_ref().map_or(true, |(_, s)| score > *s) {
                best = Some((ScentMatch { pheromone, strength }, score));
            }
        }
        best.map(|(found, _)| found)
    }

    fn len(&self) -> usize {
        self.deposits.len()
    }
}

/// Age every deposit to `now` and drop the expired ones.
///
/// A deposit is removed once its age reaches the lifetime or its decayed
/// strength falls to the removal threshold. Survivors carry their decayed
/// strength; `initial_strength` is left as created.
pub fn decay_and_prune(
    deposits: &[Pheromone],
    now: SimTime,
    config: &PheromoneConfig,
) -> Vec<Pheromone> {
    deposits
        .iter()
        .filter(|p| p.age_at(now) < config.lifetime)
        .filter_map(|p| {
            let strength = p.strength_at(now, config.lifetime);
            (strength > config.removal_strength).then(|| Pheromone {
                strength,
                ..p.clone()
            })
        })
        .collect()
}
