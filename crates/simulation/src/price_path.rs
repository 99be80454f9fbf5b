use crate::gaussian::BoxMuller;
use crate::rng::Mulberry32;
use rand::RngCore;
use rand_distr::Distribution;
use wheel_lab_domain::{MIN_PRICE, PricePath, SimulationParameters, TRADING_DAYS};

pub trait PricePathGenerator {
    fn generate(&mut self, days: usize) -> PricePath;
}

/// Daily geometric Brownian motion with a price floor.
///
/// Each day opens at the previous close and closes at
/// `max(open * exp(mu + sigma * Z), MIN_PRICE)`.
pub struct GeometricBrownianMotion<R: RngCore = Mulberry32> {
    pub start_price: f64,
    pub drift: f64,      // annualized drift (mu)
    pub volatility: f64, // annualized volatility, multiplier already applied
    pub time_step: f64,  // time step in years, 1/252 for trading days
    rng: R,
}

impl<R: RngCore> GeometricBrownianMotion<R> {
    pub fn new(start_price: f64, drift: f64, volatility: f64, time_step: f64, rng: R) -> Self {
        Self {
            start_price,
            drift,
            volatility,
            time_step,
            rng,
        }
    }

    /// Builds a daily generator from run parameters.
    pub fn from_parameters(params: &SimulationParameters, rng: R) -> Self {
        Self::new(
            params.floored_start_price(),
            params.annual_drift,
            params.effective_volatility(),
            1.0 / TRADING_DAYS as f64,
            rng,
        )
    }
}

impl<R: RngCore> PricePathGenerator for GeometricBrownianMotion<R> {
    fn generate(&mut self, days: usize) -> PricePath {
        let mut path = PricePath::with_capacity(days);

        let dt = self.time_step;
        let drift_term = (self.drift - 0.5 * self.volatility.powi(2)) * dt;
        let vol_term = self.volatility * dt.sqrt();

        let mut price = self.start_price.max(MIN_PRICE);

        for _ in 0..days {
            let z: f64 = BoxMuller.sample(&mut self.rng);
            let close = (price * (drift_term + vol_term * z).exp()).max(MIN_PRICE);
            path.push(price, close);
            price = close;
        }

        path
    }
}

/// Replays a fixed series of closes.
///
/// Day 0 opens at `start_price`; every later day opens at the prior close.
pub struct DeterministicPricePath {
    pub start_price: f64,
    pub closes: Vec<f64>,
}

impl DeterministicPricePath {
    pub fn new(start_price: f64, closes: Vec<f64>) -> Self {
        Self {
            start_price,
            closes,
        }
    }
}

impl PricePathGenerator for DeterministicPricePath {
    fn generate(&mut self, days: usize) -> PricePath {
        let mut path = PricePath::with_capacity(days.min(self.closes.len()));
        let mut open = self.start_price.max(MIN_PRICE);
        for close in self.closes.iter().take(days) {
            let close = close.max(MIN_PRICE);
            path.push(open, close);
            open = close;
        }
        path
    }
}
