use crate::constants::{MIN_PRICE, PATH_SEED_STRIDE};
use crate::enums::OptionCadence;
use serde::{Deserialize, Serialize};

/// Inputs for one Monte Carlo run.
///
/// Rates are fractions (`0.12` is 12%). Prices are in dollars per share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Price of the underlying on day 0.
    pub start_price: f64,
    /// Annualized drift of the underlying. May be negative.
    pub annual_drift: f64,
    /// Annualized volatility of the underlying.
    pub annual_volatility: f64,
    /// Scales `annual_volatility` before use.
    pub volatility_multiplier: f64,
    /// Number of independent paths to simulate.
    pub path_count: usize,
    /// Trading days per option cycle.
    pub option_period_days: u32,
    /// Premium collected per sale, as a fraction of the underlying price.
    pub premium_percent: f64,
    /// Distance of the strike from the current price. Negative is in the money.
    pub target_otm_percent: f64,
    /// Base seed. Path `i` uses `seed + i * PATH_SEED_STRIDE`.
    pub seed: u64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            start_price: 100.0,
            annual_drift: 0.12,
            annual_volatility: 0.28,
            volatility_multiplier: 1.1,
            path_count: 200,
            option_period_days: OptionCadence::Monthly.trading_days(),
            premium_percent: 0.02,
            target_otm_percent: 0.05,
            seed: 0,
        }
    }
}

impl SimulationParameters {
    /// Creates parameters with the default stock and wheel settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the starting price.
    #[must_use]
    pub fn with_start_price(mut self, start_price: f64) -> Self {
        self.start_price = start_price;
        self
    }

    /// Sets the annual drift.
    #[must_use]
    pub fn with_drift(mut self, annual_drift: f64) -> Self {
        self.annual_drift = annual_drift;
        self
    }

    /// Sets the annual volatility.
    #[must_use]
    pub fn with_volatility(mut self, annual_volatility: f64) -> Self {
        self.annual_volatility = annual_volatility;
        self
    }

    /// Sets the volatility multiplier.
    #[must_use]
    pub fn with_volatility_multiplier(mut self, multiplier: f64) -> Self {
        self.volatility_multiplier = multiplier;
        self
    }

    /// Sets the number of paths.
    #[must_use]
    pub fn with_path_count(mut self, path_count: usize) -> Self {
        self.path_count = path_count;
        self
    }

    /// Sets the option period in trading days.
    #[must_use]
    pub fn with_option_period_days(mut self, days: u32) -> Self {
        self.option_period_days = days;
        self
    }

    /// Sets the option period from a cadence preset.
    #[must_use]
    pub fn with_cadence(mut self, cadence: OptionCadence) -> Self {
        self.option_period_days = cadence.trading_days();
        self
    }

    /// Sets the premium collected per sale.
    #[must_use]
    pub fn with_premium_percent(mut self, premium_percent: f64) -> Self {
        self.premium_percent = premium_percent;
        self
    }

    /// Sets the target out-of-the-money distance.
    #[must_use]
    pub fn with_target_otm_percent(mut self, otm: f64) -> Self {
        self.target_otm_percent = otm;
        self
    }

    /// Sets the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Same parameters with the seed advanced by one, for a fresh sample.
    #[must_use]
    pub fn next_run(&self) -> Self {
        Self {
            seed: self.seed.wrapping_add(1),
            ..self.clone()
        }
    }

    /// Volatility after applying the multiplier.
    #[must_use]
    pub fn effective_volatility(&self) -> f64 {
        self.annual_volatility * self.volatility_multiplier
    }

    /// Start price floored to `MIN_PRICE`.
    #[must_use]
    pub fn floored_start_price(&self) -> f64 {
        self.start_price.max(MIN_PRICE)
    }

    /// Sub-seed for the path at `index`.
    ///
    /// Depends only on the base seed and the index, never on `path_count`.
    #[must_use]
    pub fn path_seed(&self, index: usize) -> u64 {
        self.seed
            .wrapping_add((index as u64).wrapping_mul(PATH_SEED_STRIDE))
    }
}
