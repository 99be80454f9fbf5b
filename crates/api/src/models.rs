//! API request and response models.

use serde::{Deserialize, Serialize};
use wheel_lab_domain::{CONTRACT_SIZE, OptionCadence, ParameterBounds, SimulationParameters};
use wheel_lab_simulation::state::SimulationSummary;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One option cadence preset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CadenceInfo {
    /// Cadence name.
    pub name: OptionCadence,
    /// Trading days per cycle.
    pub trading_days: u32,
}

/// Accepted parameter ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsResponse {
    /// Range of every bounded parameter.
    pub bounds: ParameterBounds,
    /// Available cadence presets.
    pub cadences: Vec<CadenceInfo>,
    /// Shares per contract.
    pub contract_size: u32,
    /// Defaults applied to omitted fields.
    pub defaults: SimulationParameters,
}

impl BoundsResponse {
    #[must_use]
    pub fn new(bounds: ParameterBounds) -> Self {
        Self {
            bounds,
            cadences: OptionCadence::ALL
                .iter()
                .map(|cadence| CadenceInfo {
                    name: *cadence,
                    trading_days: cadence.trading_days(),
                })
                .collect(),
            contract_size: CONTRACT_SIZE,
            defaults: SimulationParameters::default(),
        }
    }
}

/// Optional overrides on top of the default parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterOverrides {
    pub start_price: Option<f64>,
    pub annual_drift: Option<f64>,
    pub annual_volatility: Option<f64>,
    pub volatility_multiplier: Option<f64>,
    pub path_count: Option<usize>,
    pub option_period_days: Option<u32>,
    pub premium_percent: Option<f64>,
    pub target_otm_percent: Option<f64>,
    pub seed: Option<u64>,
}

/// Request to run a simulation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Parameter overrides.
    #[serde(flatten)]
    pub overrides: ParameterOverrides,
    /// Cadence preset. An explicit `option_period_days` takes precedence.
    #[serde(default)]
    pub cadence: Option<OptionCadence>,
    /// Reject out-of-range values instead of clamping them.
    #[serde(default)]
    pub strict: bool,
}

impl SimulationRequest {
    /// Resolves the request into full parameters.
    ///
    /// `fallback_seed` is used when the request carries no seed.
    #[must_use]
    pub fn into_parameters(self, fallback_seed: u64) -> SimulationParameters {
        let o = self.overrides;
        let mut params = SimulationParameters::default();
        if let Some(cadence) = self.cadence {
            params = params.with_cadence(cadence);
        }

        SimulationParameters {
            start_price: o.start_price.unwrap_or(params.start_price),
            annual_drift: o.annual_drift.unwrap_or(params.annual_drift),
            annual_volatility: o.annual_volatility.unwrap_or(params.annual_volatility),
            volatility_multiplier: o
                .volatility_multiplier
                .unwrap_or(params.volatility_multiplier),
            path_count: o.path_count.unwrap_or(params.path_count),
            option_period_days: o.option_period_days.unwrap_or(params.option_period_days),
            premium_percent: o.premium_percent.unwrap_or(params.premium_percent),
            target_otm_percent: o.target_otm_percent.unwrap_or(params.target_otm_percent),
            seed: o.seed.unwrap_or(fallback_seed),
        }
    }
}

/// Simulation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Parameters the simulation actually ran with.
    pub parameters: SimulationParameters,
    /// Whether any requested value was clamped.
    pub clamped: bool,
    /// Aggregated results.
    pub summary: SimulationSummary,
}
