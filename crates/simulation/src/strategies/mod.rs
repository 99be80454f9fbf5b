//! Portfolio strategies valued over a series of daily closes.

/// Buy-and-hold strategy.
pub mod buy_and_hold;
/// Options wheel strategy.
pub mod wheel;

pub use buy_and_hold::BuyAndHold;
pub use wheel::{WheelConfig, WheelOutcome, WheelStrategy};

/// A strategy that turns daily closes into daily portfolio values.
pub trait PortfolioStrategy {
    /// Portfolio value at each day's close, in dollars.
    ///
    /// The result has the same length as `closes`.
    fn values(&self, closes: &[f64]) -> Vec<f64>;

    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Value after the last close, or `None` for an empty series.
    fn terminal_value(&self, closes: &[f64]) -> Option<f64> {
        self.values(closes).last().copied()
    }
}
