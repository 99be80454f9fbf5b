//! Accepted ranges for user-supplied simulation parameters.
//!
//! Front ends either clamp inputs into these ranges (the forgiving mode used
//! by interactive forms) or validate them and report the first offending
//! field.

use crate::error::ParameterError;
use crate::value_objects::simulation_parameters::SimulationParameters;
use serde::{Deserialize, Serialize};

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Creates a new range. `min` must not exceed `max`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into the range, falling back to `fallback` when the
    /// value is not finite.
    #[must_use]
    pub fn clamp_or(&self, value: f64, fallback: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            fallback.clamp(self.min, self.max)
        }
    }

    fn check(&self, field: &'static str, value: f64) -> Result<(), ParameterError> {
        if !value.is_finite() {
            return Err(ParameterError::NotFinite { field });
        }
        if !self.contains(value) {
            return Err(ParameterError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Accepted ranges for every bounded parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    pub start_price: ValueRange,
    pub annual_drift: ValueRange,
    pub annual_volatility: ValueRange,
    pub volatility_multiplier: ValueRange,
    pub premium_percent: ValueRange,
    pub target_otm_percent: ValueRange,
    pub path_count: ValueRange,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            start_price: ValueRange::new(20.0, 1000.0),
            annual_drift: ValueRange::new(-0.40, 0.40),
            annual_volatility: ValueRange::new(0.005, 0.80),
            volatility_multiplier: ValueRange::new(0.4, 2.0),
            premium_percent: ValueRange::new(0.003, 0.15),
            target_otm_percent: ValueRange::new(-0.15, 0.25),
            path_count: ValueRange::new(10.0, 800.0),
        }
    }
}

impl ParameterBounds {
    /// Lowers the path-count ceiling to `max_paths` if it is tighter.
    #[must_use]
    pub fn with_max_paths(mut self, max_paths: usize) -> Self {
        let ceiling = (max_paths.max(1) as f64).min(self.path_count.max);
        self.path_count = ValueRange::new(self.path_count.min.min(ceiling), ceiling);
        self
    }

    /// Largest accepted path count.
    #[must_use]
    pub fn max_paths(&self) -> usize {
        self.path_count.max as usize
    }

    /// Clamps every bounded field into range.
    ///
    /// Non-finite values fall back to the default parameters before clamping.
    /// The option period is raised to at least one day; the seed is untouched.
    #[must_use]
    pub fn clamp(&self, params: &SimulationParameters) -> SimulationParameters {
        let defaults = SimulationParameters::default();
        SimulationParameters {
            start_price: self
                .start_price
                .clamp_or(params.start_price, defaults.start_price),
            annual_drift: self
                .annual_drift
                .clamp_or(params.annual_drift, defaults.annual_drift),
            annual_volatility: self
                .annual_volatility
                .clamp_or(params.annual_volatility, defaults.annual_volatility),
            volatility_multiplier: self
                .volatility_multiplier
                .clamp_or(params.volatility_multiplier, defaults.volatility_multiplier),
            path_count: self
                .path_count
                .clamp_or(params.path_count as f64, defaults.path_count as f64)
                .round() as usize,
            option_period_days: params.option_period_days.max(1),
            premium_percent: self
                .premium_percent
                .clamp_or(params.premium_percent, defaults.premium_percent),
            target_otm_percent: self
                .target_otm_percent
                .clamp_or(params.target_otm_percent, defaults.target_otm_percent),
            seed: params.seed,
        }
    }

    /// Checks every bounded field, returning the first violation.
    pub fn validate(&self, params: &SimulationParameters) -> Result<(), ParameterError> {
        self.start_price.check("start_price", params.start_price)?;
        self.annual_drift.check("annual_drift", params.annual_drift)?;
        self.annual_volatility
            .check("annual_volatility", params.annual_volatility)?;
        self.volatility_multiplier
            .check("volatility_multiplier", params.volatility_multiplier)?;
        self.path_count
            .check("path_count", params.path_count as f64)?;
        if params.option_period_days == 0 {
            return Err(ParameterError::EmptyOptionPeriod);
        }
        self.premium_percent
            .check("premium_percent", params.premium_percent)?;
        self.target_otm_percent
            .check("target_otm_percent", params.target_otm_percent)?;
        Ok(())
    }
}
