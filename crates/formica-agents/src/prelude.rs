//! Formica Agents Prelude: convenient imports for common usage.
//!
//! ```rust
//! use formica_agents::prelude::*;
//! ```

pub use crate::behavior::{death_cause, step};
pub use crate::locomotion::advance;
pub use crate::emission::{deposit_for, emit, Deposit};
pub use crate::genome::{
    create_offspring, mutate, role_for_index, sample_genes, DEFAULT_MUTATION_RATE,
};

// Re-export from core
pub use formica_core::prelude::*;
