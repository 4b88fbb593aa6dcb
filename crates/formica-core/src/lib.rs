//! # Formica Core
//!
//! Shared types, geometry, and configuration for the Formica colony
//! simulation.
//!
//! - **types**: ants, colonies, resources, pheromones, and the world snapshot
//! - **geometry**: ground-plane vector math and random point sampling
//! - **field**: the scent query seam used by the behavior rules
//! - **config**: every tunable constant, serde-loadable
//! - **rng**: the seedable random source
//!
//! ## Quick Start
//!
//! ```rust
//! use formica_core::prelude::*;
//!
//! let nest = Vector3D::ground(0.0, 0.0);
//! let food = Vector3D::ground(3.0, 4.0);
//! assert_eq!(nest.distance_to(&food), 5.0);
//!
//! let id = AntId::from_seed(42);
//! assert_eq!(id, AntId::from_seed(42));
//! ```

pub mod types;
pub mod geometry;
pub mod field;
pub mod config;
pub mod rng;
pub mod error;
pub mod prelude;
