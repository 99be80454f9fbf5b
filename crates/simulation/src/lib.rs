//! Monte Carlo engine comparing buy-and-hold against the options wheel.
//!
//! This crate provides:
//! - A seeded, reproducible PRNG and a Box-Muller Gaussian sampler
//! - Geometric Brownian motion price paths
//! - Buy-and-hold and wheel portfolio valuators
//! - Event logging for the wheel's option sales and assignments
//! - A Monte Carlo runner that aggregates many independent paths

/// Prelude module for convenient imports.
pub mod prelude;

/// Wheel events.
pub mod event;
/// Box-Muller normal sampler.
pub mod gaussian;
/// Monte Carlo runner and aggregation.
pub mod monte_carlo;
/// Price path generators.
pub mod price_path;
/// Deterministic random number generation.
pub mod rng;
/// Per-path outcomes and run summaries.
pub mod state;
/// Portfolio strategies.
pub mod strategies;
