use crate::price_path::{GeometricBrownianMotion, PricePathGenerator};
use crate::rng::Mulberry32;
use crate::state::{PathOutcome, SimulationSummary};
use crate::strategies::{BuyAndHold, PortfolioStrategy, WheelStrategy};
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, warn};
use wheel_lab_domain::{PricePath, SimulationParameters, TRADING_DAYS};

/// Runs many independent paths and compares buy-and-hold against the wheel.
///
/// Path `i` is seeded from `seed + i * PATH_SEED_STRIDE`, so a path's result
/// never depends on how many other paths run alongside it.
pub struct MonteCarloRunner {
    params: SimulationParameters,
    buy_hold: BuyAndHold,
    wheel: WheelStrategy,
}

impl MonteCarloRunner {
    pub fn new(params: SimulationParameters) -> Self {
        let wheel = WheelStrategy::from_parameters(&params);
        Self {
            params,
            buy_hold: BuyAndHold::default(),
            wheel,
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Paths to simulate. A count below one is treated as one.
    pub fn path_count(&self) -> usize {
        self.params.path_count.max(1)
    }

    /// Generates and values the path at `index`.
    pub fn simulate_path(&self, index: usize) -> PathOutcome {
        let rng = Mulberry32::seed_from_u64(self.params.path_seed(index));
        let mut generator = GeometricBrownianMotion::from_parameters(&self.params, rng);
        self.evaluate_path(generator.generate(TRADING_DAYS))
    }

    /// Values an already generated path under both strategies.
    pub fn evaluate_path(&self, price_path: PricePath) -> PathOutcome {
        let buy_hold_values = self.buy_hold.values(&price_path.close);
        let wheel = self.wheel.simulate(&price_path.close);
        PathOutcome {
            price_path,
            buy_hold_values,
            wheel,
        }
    }

    /// Simulates every path on the current thread, in index order.
    pub fn run_paths(&self) -> Vec<PathOutcome> {
        let count = self.checked_path_count();
        (0..count).map(|i| self.simulate_path(i)).collect()
    }

    /// Simulates every path on the rayon pool, in index order.
    pub fn run_paths_parallel(&self) -> Vec<PathOutcome> {
        let count = self.checked_path_count();
        (0..count)
            .into_par_iter()
            .map(|i| self.simulate_path(i))
            .collect()
    }

    pub fn run(&self) -> SimulationSummary {
        Self::aggregate(self.run_paths())
    }

    /// Same result as [`run`](Self::run), computed across threads.
    pub fn run_parallel(&self) -> SimulationSummary {
        Self::aggregate(self.run_paths_parallel())
    }

    fn checked_path_count(&self) -> usize {
        let count = self.path_count();
        if self.params.path_count < 1 {
            warn!(
                requested = self.params.path_count,
                "path count below one, running a single path"
            );
        }
        debug!(
            paths = count,
            seed = self.params.seed,
            option_period_days = self.params.option_period_days,
            baseline = self.buy_hold.name(),
            strategy = self.wheel.name(),
            "running Monte Carlo simulation"
        );
        count
    }

    /// Averages per-path results into a summary.
    ///
    /// The first outcome supplies the sample path. Series are averaged over
    /// the first outcome's length.
    pub fn aggregate(mut results: Vec<PathOutcome>) -> SimulationSummary {
        if results.is_empty() {
            return SimulationSummary::default();
        }

        let count = results.len() as f64;

        let avg_buy_hold_series = average_series(results.iter().map(|r| &r.buy_hold_values));
        let avg_wheel_series = average_series(results.iter().map(|r| &r.wheel.values));

        let total_buy_hold: f64 = results.iter().map(PathOutcome::buy_hold_terminal).sum();
        let total_wheel: f64 = results.iter().map(PathOutcome::wheel_terminal).sum();
        let wins = results.iter().filter(|r| r.wheel_won()).count();
        let total_assignments: f64 = results
            .iter()
            .map(|r| f64::from(r.wheel.assignments))
            .sum();
        let total_premium: f64 = results.iter().map(|r| r.wheel.total_premium).sum();
        let total_sales: f64 = results
            .iter()
            .map(|r| f64::from(r.wheel.option_sales))
            .sum();

        let path_count = results.len();
        let first = results.swap_remove(0);

        let summary = SimulationSummary {
            path_count,
            sample_path: first.price_path,
            sample_events: first.wheel.events,
            avg_buy_hold_series,
            avg_wheel_series,
            buy_hold_mean_terminal: total_buy_hold / count,
            wheel_mean_terminal: total_wheel / count,
            wheel_win_rate: wins as f64 / count,
            mean_assignments: total_assignments / count,
            mean_premium: total_premium / count,
            mean_option_sales: total_sales / count,
        };

        debug!(
            paths = path_count,
            buy_hold = summary.buy_hold_mean_terminal,
            wheel = summary.wheel_mean_terminal,
            win_rate = summary.wheel_win_rate,
            "Monte Carlo simulation complete"
        );

        summary
    }
}

/// Pointwise mean of equally long series.
fn average_series<'a, I>(series: I) -> Vec<f64>
where
    I: ExactSizeIterator<Item = &'a Vec<f64>> + Clone,
{
    let count = series.len();
    let Some(length) = series.clone().next().map(Vec::len) else {
        return Vec::new();
    };

    let mut totals = vec![0.0; length];
    for values in series {
        for (total, value) in totals.iter_mut().zip(values) {
            *total += value;
        }
    }

    let count = count as f64;
    totals.into_iter().map(|total| total / count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_path::DeterministicPricePath;
    use wheel_lab_domain::{CONTRACT_SIZE, MIN_PRICE};

    fn flat_scenario() -> SimulationParameters {
        SimulationParameters::new()
            .with_start_price(100.0)
            .with_drift(0.0)
            .with_volatility(0.0)
            .with_path_count(5)
            .with_option_period_days(21)
            .with_premium_percent(0.02)
            .with_target_otm_percent(0.05)
            .with_seed(42)
    }

    #[test]
    fn test_flat_scenario() {
        let summary = MonteCarloRunner::new(flat_scenario()).run();

        assert_eq!(summary.path_count, 5);
        assert_eq!(summary.sample_path.close[0], 100.0);
        assert_eq!(
            summary.buy_hold_mean_terminal,
            100.0 * f64::from(CONTRACT_SIZE)
        );
        assert!(summary.wheel_mean_terminal > summary.buy_hold_mean_terminal);
        assert!((summary.wheel_mean_terminal - 12_400.0).abs() < 1e-6);
        assert_eq!(summary.wheel_win_rate, 1.0);
        assert_eq!(summary.mean_assignments, 0.0);
        assert_eq!(summary.mean_option_sales, 12.0);
        assert!((summary.mean_premium - 2_400.0).abs() < 1e-6);
    }

    #[test]
    fn test_flat_scenario_paths_identical() {
        let paths = MonteCarloRunner::new(flat_scenario()).run_paths();
        assert_eq!(paths.len(), 5);
        for path in &paths[1..] {
            assert_eq!(path, &paths[0]);
        }
    }

    #[test]
    fn test_determinism() {
        let params = SimulationParameters::new().with_path_count(40).with_seed(7);
        let a = MonteCarloRunner::new(params.clone()).run();
        let b = MonteCarloRunner::new(params).run();
        assert_eq!(a, b);
    }

    #[test]
    fn test_next_run_gives_fresh_sample() {
        let params = SimulationParameters::new().with_path_count(20).with_seed(7);
        let a = MonteCarloRunner::new(params.clone()).run();
        let b = MonteCarloRunner::new(params.next_run()).run();
        assert_ne!(a.sample_path, b.sample_path);
        assert_eq!(b.avg_wheel_series.len(), TRADING_DAYS);
    }

    #[test]
    fn test_path_independence() {
        let params = SimulationParameters::new().with_path_count(12).with_seed(1234);
        let shorter = MonteCarloRunner::new(params.clone()).run_paths();
        let longer = MonteCarloRunner::new(params.with_path_count(13)).run_paths();

        assert_eq!(longer.len(), 13);
        assert_eq!(&longer[..12], &shorter[..]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let runner =
            MonteCarloRunner::new(SimulationParameters::new().with_path_count(64).with_seed(99));
        assert_eq!(runner.run(), runner.run_parallel());
    }

    #[test]
    fn test_paths_are_continuous_and_floored() {
        let params = SimulationParameters::new()
            .with_drift(-0.4)
            .with_volatility(0.8)
            .with_volatility_multiplier(2.0)
            .with_path_count(30);

        for outcome in MonteCarloRunner::new(params).run_paths() {
            assert_eq!(outcome.price_path.len(), TRADING_DAYS);
            assert!(outcome.price_path.is_continuous());
            assert!(outcome.price_path.min_price().unwrap() >= MIN_PRICE);
            assert_eq!(outcome.wheel.values.len(), TRADING_DAYS);
        }
    }

    #[test]
    fn test_zero_volatility_paths_agree() {
        let params = SimulationParameters::new()
            .with_drift(0.3)
            .with_volatility(0.0)
            .with_path_count(25);
        let summary = MonteCarloRunner::new(params).run();
        assert!(summary.wheel_win_rate == 0.0 || summary.wheel_win_rate == 1.0);
    }

    #[test]
    fn test_zero_paths_clamped_to_one() {
        let runner = MonteCarloRunner::new(SimulationParameters::new().with_path_count(0));
        assert_eq!(runner.path_count(), 1);

        let summary = runner.run();
        assert_eq!(summary.path_count, 1);
        assert_eq!(summary.avg_buy_hold_series.len(), TRADING_DAYS);
    }

    #[test]
    fn test_averages_match_per_path_results() {
        let runner =
            MonteCarloRunner::new(SimulationParameters::new().with_path_count(8).with_seed(3));
        let paths = runner.run_paths();
        let summary = MonteCarloRunner::aggregate(paths.clone());

        let day = 100;
        let mean_day: f64 = paths.iter().map(|p| p.wheel.values[day]).sum::<f64>() / 8.0;
        assert!((summary.avg_wheel_series[day] - mean_day).abs() < 1e-9);

        let wins = paths.iter().filter(|p| p.wheel_won()).count() as f64;
        assert_eq!(summary.wheel_win_rate, wins / 8.0);
        assert_eq!(summary.sample_path, paths[0].price_path);
        assert_eq!(summary.sample_events, paths[0].wheel.events);
    }

    #[test]
    fn test_evaluate_fixed_path() {
        let runner = MonteCarloRunner::new(
            SimulationParameters::new()
                .with_start_price(100.0)
                .with_option_period_days(2),
        );
        let path = DeterministicPricePath::new(100.0, vec![98.0, 90.0, 92.0, 110.0, 111.0])
            .generate(TRADING_DAYS);
        let outcome = runner.evaluate_path(path);

        // Calls cap the rally: the wheel ends at 10,550 against 11,100.
        assert_eq!(outcome.buy_hold_values[1], 9_000.0);
        assert_eq!(outcome.wheel.assignments, 2);
        assert!(!outcome.wheel_won());
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(MonteCarloRunner::aggregate(Vec::new()), SimulationSummary::default());
    }
}
