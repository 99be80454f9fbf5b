//! Per-path outcomes and the aggregated run summary.

use crate::event::EventLog;
use crate::strategies::WheelOutcome;
use serde::{Deserialize, Serialize};
use wheel_lab_domain::PricePath;

/// Everything produced by one simulated path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathOutcome {
    /// Generated prices.
    pub price_path: PricePath,
    /// Buy-and-hold value at each close.
    pub buy_hold_values: Vec<f64>,
    /// Wheel result over the same closes.
    pub wheel: WheelOutcome,
}

impl PathOutcome {
    /// Buy-and-hold value after the final close.
    #[must_use]
    pub fn buy_hold_terminal(&self) -> f64 {
        self.buy_hold_values.last().copied().unwrap_or(0.0)
    }

    /// Wheel value after the final close.
    #[must_use]
    pub fn wheel_terminal(&self) -> f64 {
        self.wheel.terminal_value().unwrap_or(0.0)
    }

    /// Returns true when the wheel finished strictly ahead of buy-and-hold.
    #[must_use]
    pub fn wheel_won(&self) -> bool {
        self.wheel_terminal() > self.buy_hold_terminal()
    }
}

/// Results from a completed Monte Carlo run.
///
/// Value series are in dollars; rates are fractions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// Number of paths actually simulated.
    pub path_count: usize,
    /// Prices of the first path, for display.
    pub sample_path: PricePath,
    /// Wheel events on the first path.
    pub sample_events: EventLog,
    /// Mean buy-and-hold value per day across paths.
    pub avg_buy_hold_series: Vec<f64>,
    /// Mean wheel value per day across paths.
    pub avg_wheel_series: Vec<f64>,
    /// Mean buy-and-hold terminal value.
    pub buy_hold_mean_terminal: f64,
    /// Mean wheel terminal value.
    pub wheel_mean_terminal: f64,
    /// Fraction of paths where the wheel finished strictly ahead.
    pub wheel_win_rate: f64,
    /// Mean assignments per path.
    pub mean_assignments: f64,
    /// Mean premium collected per path.
    pub mean_premium: f64,
    /// Mean options written per path.
    pub mean_option_sales: f64,
}

impl SimulationSummary {
    /// Returns true when the wheel's mean terminal value is at least buy-and-hold's.
    #[must_use]
    pub fn wheel_led(&self) -> bool {
        self.wheel_mean_terminal >= self.buy_hold_mean_terminal
    }

    /// Share of option sales that ended in assignment.
    #[must_use]
    pub fn assignment_rate(&self) -> f64 {
        self.mean_assignments / self.mean_option_sales.max(1.0)
    }

    /// Wheel mean terminal minus buy-and-hold mean terminal.
    #[must_use]
    pub fn wheel_edge(&self) -> f64 {
        self.wheel_mean_terminal - self.buy_hold_mean_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_outcome_terminals() {
        let outcome = PathOutcome {
            price_path: PricePath::default(),
            buy_hold_values: vec![10_000.0, 10_500.0],
            wheel: WheelOutcome {
                values: vec![10_200.0, 10_500.0],
                ..WheelOutcome::default()
            },
        };

        assert_eq!(outcome.buy_hold_terminal(), 10_500.0);
        assert_eq!(outcome.wheel_terminal(), 10_500.0);
        assert!(!outcome.wheel_won());
    }

    #[test]
    fn test_summary_ratios() {
        let summary = SimulationSummary {
            buy_hold_mean_terminal: 11_000.0,
            wheel_mean_terminal: 11_250.0,
            mean_assignments: 3.0,
            mean_option_sales: 12.0,
            ..SimulationSummary::default()
        };

        assert!(summary.wheel_led());
        assert_eq!(summary.assignment_rate(), 0.25);
        assert_eq!(summary.wheel_edge(), 250.0);
        assert_eq!(SimulationSummary::default().assignment_rate(), 0.0);
    }
}
