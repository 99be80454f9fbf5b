//! Domain types for the options-wheel Monte Carlo simulator.
//!
//! This crate holds the vocabulary shared by the simulation engine and its
//! front ends:
//! - Simulation parameters and their accepted ranges
//! - Option cadence and option side enums
//! - Price path value objects
//! - Parameter validation errors

/// Fixed simulation constants.
pub mod constants;
/// Enumerations.
pub mod enums;
/// Error types.
pub mod error;
/// Value objects.
pub mod value_objects;

pub use constants::{CONTRACT_SIZE, MIN_PRICE, PATH_SEED_STRIDE, TRADING_DAYS};
pub use enums::{OptionCadence, OptionSide};
pub use error::ParameterError;
pub use value_objects::{ParameterBounds, PricePath, SimulationParameters, ValueRange};
