//! The options wheel.
//!
//! The wheel starts in cash and writes a cash-secured put. When a put is
//! assigned it buys one contract of shares and switches to writing covered
//! calls; when a call is assigned the shares are sold and it goes back to
//! puts. Options are only settled at expiry.

use super::PortfolioStrategy;
use crate::event::{EventLog, WheelEvent};
use serde::{Deserialize, Serialize};
use wheel_lab_domain::{CONTRACT_SIZE, MIN_PRICE, OptionSide, SimulationParameters};

/// Configuration for the wheel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Price used for the opening cash balance and the first put.
    pub start_price: f64,
    /// Trading days per option cycle.
    pub option_period_days: u32,
    /// Premium per sale as a fraction of the underlying price.
    pub premium_percent: f64,
    /// Strike distance from the current price. Negative is in the money.
    pub target_otm_percent: f64,
    /// Shares per contract.
    pub contract_size: u32,
}

impl WheelConfig {
    /// Builds a wheel configuration from run parameters.
    #[must_use]
    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Self {
            start_price: params.floored_start_price(),
            option_period_days: params.option_period_days,
            premium_percent: params.premium_percent,
            target_otm_percent: params.target_otm_percent,
            contract_size: CONTRACT_SIZE,
        }
    }

    /// Strike for a new option written at `price`.
    #[must_use]
    pub fn strike_for(&self, price: f64, call: bool) -> f64 {
        let factor = if call {
            1.0 + self.target_otm_percent
        } else {
            1.0 - self.target_otm_percent
        };
        (price * factor).max(MIN_PRICE)
    }
}

/// Result of running the wheel over one path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelOutcome {
    /// Portfolio value at each day's close.
    pub values: Vec<f64>,
    /// Number of assignments.
    pub assignments: u32,
    /// Total premium collected.
    pub total_premium: f64,
    /// Number of options written.
    pub option_sales: u32,
    /// Everything that happened on the path.
    pub events: EventLog,
}

impl WheelOutcome {
    /// Value after the final close.
    #[must_use]
    pub fn terminal_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Mutable state of one wheel run.
#[derive(Debug, Clone)]
struct WheelState {
    cash: f64,
    shares: u32,
    option: OptionSide,
    days_until_expiry: u32,
    assignments: u32,
    total_premium: f64,
    option_sales: u32,
    events: EventLog,
}

impl WheelState {
    /// Starts in cash and writes the opening put before day 0.
    fn open(config: &WheelConfig) -> Self {
        let price = config.start_price.max(MIN_PRICE);
        let mut state = Self {
            cash: price * f64::from(config.contract_size),
            shares: 0,
            option: OptionSide::Put {
                strike: config.strike_for(price, false),
            },
            days_until_expiry: config.option_period_days,
            assignments: 0,
            total_premium: 0.0,
            option_sales: 0,
            events: EventLog::new(),
        };
        state.sell_option(config, None, price);
        state
    }

    /// Writes a call if holding shares, otherwise a put.
    fn sell_option(&mut self, config: &WheelConfig, day: Option<usize>, price: f64) {
        let call = self.shares > 0;
        let strike = config.strike_for(price, call);
        self.option = if call {
            OptionSide::Call { strike }
        } else {
            OptionSide::Put { strike }
        };

        let premium = price * config.premium_percent * f64::from(config.contract_size);
        self.total_premium += premium;
        self.cash += premium;
        self.days_until_expiry = config.option_period_days;
        self.option_sales += 1;

        self.events
            .record(WheelEvent::option_sold(day, price, self.option, premium));
    }

    /// Settles the short option at expiry.
    fn settle(&mut self, config: &WheelConfig, day: usize, price: f64) {
        let contract = f64::from(config.contract_size);
        match self.option {
            OptionSide::Put { strike } if self.shares == 0 && price <= strike => {
                self.cash -= strike * contract;
                self.shares = config.contract_size;
                self.assignments += 1;
                self.events.record(WheelEvent::assigned(
                    day,
                    price,
                    self.option,
                    self.shares,
                    self.cash,
                ));
            }
            OptionSide::Call { strike } if self.shares > 0 && price >= strike => {
                self.cash += strike * contract;
                self.shares = 0;
                self.assignments += 1;
                self.events.record(WheelEvent::assigned(
                    day,
                    price,
                    self.option,
                    self.shares,
                    self.cash,
                ));
            }
            side => {
                self.events
                    .record(WheelEvent::expired_worthless(day, price, side));
            }
        }
    }

    fn value(&self, price: f64) -> f64 {
        self.cash + f64::from(self.shares) * price
    }

    fn finish(self, values: Vec<f64>) -> WheelOutcome {
        WheelOutcome {
            values,
            assignments: self.assignments,
            total_premium: self.total_premium,
            option_sales: self.option_sales,
            events: self.events,
        }
    }
}

/// Alternates cash-secured puts and covered calls over a close series.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelStrategy {
    pub config: WheelConfig,
}

impl WheelStrategy {
    #[must_use]
    pub fn new(config: WheelConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Self::new(WheelConfig::from_parameters(params))
    }

    /// Runs the wheel over `closes`.
    ///
    /// An empty series yields an empty outcome with zero counts.
    #[must_use]
    pub fn simulate(&self, closes: &[f64]) -> WheelOutcome {
        if closes.is_empty() {
            return WheelOutcome::default();
        }

        let config = &self.config;
        let mut state = WheelState::open(config);
        let mut values = Vec::with_capacity(closes.len());
        let last_day = closes.len() - 1;

        for (day, &price) in closes.iter().enumerate() {
            state.days_until_expiry = state.days_until_expiry.saturating_sub(1);

            if state.days_until_expiry == 0 {
                state.settle(config, day, price);
                if day < last_day {
                    state.sell_option(config, Some(day), price);
                }
            }

            values.push(state.value(price));
        }

        state.finish(values)
    }
}

impl PortfolioStrategy for WheelStrategy {
    fn values(&self, closes: &[f64]) -> Vec<f64> {
        self.simulate(closes).values
    }

    fn name(&self) -> &'static str {
        "Wheel"
    }
}
