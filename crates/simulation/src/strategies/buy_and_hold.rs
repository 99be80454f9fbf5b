use super::PortfolioStrategy;
use wheel_lab_domain::CONTRACT_SIZE;

/// Holds a fixed number of shares for the whole path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyAndHold {
    /// Shares held.
    pub shares: u32,
}

impl BuyAndHold {
    #[must_use]
    pub fn new(shares: u32) -> Self {
        Self { shares }
    }
}

impl Default for BuyAndHold {
    fn default() -> Self {
        Self::new(CONTRACT_SIZE)
    }
}

impl PortfolioStrategy for BuyAndHold {
    fn values(&self, closes: &[f64]) -> Vec<f64> {
        let shares = f64::from(self.shares);
        closes.iter().map(|close| close * shares).collect()
    }

    fn name(&self) -> &'static str {
        "Buy & Hold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_closes_by_contract() {
        let strategy = BuyAndHold::default();
        assert_eq!(
            strategy.values(&[100.0, 101.5, 98.25]),
            vec![10_000.0, 10_150.0, 9_825.0]
        );
        assert_eq!(strategy.terminal_value(&[100.0, 120.0]), Some(12_000.0));
        assert_eq!(strategy.name(), "Buy & Hold");
    }

    #[test]
    fn test_empty_series() {
        let strategy = BuyAndHold::new(10);
        assert!(strategy.values(&[]).is_empty());
        assert_eq!(strategy.terminal_value(&[]), None);
    }
}
