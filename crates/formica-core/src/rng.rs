//! Seedable random source threaded through every decision point.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// The generator the engine draws from.
pub type SimRng = ChaCha12Rng;

/// Create a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> SimRng {
    ChaCha12Rng::seed_from_u64(seed)
}

/// Draw a fresh seed from an existing stream (used on reset).
pub fn derive_seed<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.random()
}

/// Bernoulli draw; probabilities outside `[0, 1]` are clamped.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    if probability <= 0.0 {
        return false;
    }
    if probability >= 1.0 {
        return true;
    }
    rng.random_bool(probability)
}
