use serde::{Deserialize, Serialize};

/// Daily open and close prices of one simulated path.
///
/// Both series share the same length and are indexed by trading day,
/// starting at day 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricePath {
    pub open: Vec<f64>,
    pub close: Vec<f64>,
}

impl PricePath {
    /// Creates an empty path with room for `days` entries.
    #[must_use]
    pub fn with_capacity(days: usize) -> Self {
        Self {
            open: Vec::with_capacity(days),
            close: Vec::with_capacity(days),
        }
    }

    /// Appends one trading day.
    pub fn push(&mut self, open: f64, close: f64) {
        self.open.push(open);
        self.close.push(close);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Close of the final trading day.
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.close.last().copied()
    }

    /// Returns true when every day opens at the previous day's close.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.open.len() == self.close.len()
            && self
                .close
                .iter()
                .zip(self.open.iter().skip(1))
                .all(|(close, next_open)| close == next_open)
    }

    /// Lowest open or close on the path.
    #[must_use]
    pub fn min_price(&self) -> Option<f64> {
        self.open
            .iter()
            .chain(self.close.iter())
            .copied()
            .reduce(f64::min)
    }
}
