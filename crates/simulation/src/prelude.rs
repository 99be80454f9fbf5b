//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use wheel_lab_simulation::prelude::*;
//! ```

// Events
pub use crate::event::{EventData, EventLog, WheelEvent, WheelEventType};

// Gaussian sampling
pub use crate::gaussian::BoxMuller;

// Monte Carlo
pub use crate::monte_carlo::MonteCarloRunner;

// Price path generators
pub use crate::price_path::{DeterministicPricePath, GeometricBrownianMotion, PricePathGenerator};

// Random numbers
pub use crate::rng::Mulberry32;

// Outcomes
pub use crate::state::{PathOutcome, SimulationSummary};

// Strategies
pub use crate::strategies::{BuyAndHold, PortfolioStrategy, WheelOutcome, WheelStrategy};

// Domain
pub use wheel_lab_domain::{
    CONTRACT_SIZE, MIN_PRICE, OptionCadence, OptionSide, PricePath, SimulationParameters,
    TRADING_DAYS,
};
