use crate::rng::unit_interval;
use rand::{Rng, RngCore};
use rand_distr::Distribution;
use std::f64::consts::PI;

/// Standard normal sampler using the Box-Muller transform.
///
/// Consumes two uniform draws per sample. A draw of exactly zero is
/// discarded and redrawn so the logarithm stays finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxMuller;

impl Distribution<f64> for BoxMuller {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u1 = nonzero_unit(rng);
        let u2 = nonzero_unit(rng);
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }
}

fn nonzero_unit<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u = unit_interval(rng);
        if u != 0.0 {
            return u;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Mulberry32;

    /// Replays a fixed sequence of 32-bit words.
    struct ScriptedRng {
        words: Vec<u32>,
        cursor: usize,
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let word = self.words[self.cursor];
            self.cursor += 1;
            word
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for byte in dst {
                *byte = self.next_u32() as u8;
            }
        }
    }

    #[test]
    fn test_zero_draws_are_redrawn() {
        let mut rng = ScriptedRng {
            words: vec![0, 1 << 31, 0, 1 << 30],
            cursor: 0,
        };

        // u1 = 0.5, u2 = 0.25, so the cosine term vanishes.
        let z = BoxMuller.sample(&mut rng);
        assert_eq!(rng.cursor, 4);
        assert!(z.abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // u1 = 0.5, u2 = 0.5: sqrt(2 ln 2) * cos(pi)
        let mut rng = ScriptedRng {
            words: vec![1 << 31, 1 << 31],
            cursor: 0,
        };
        let z = BoxMuller.sample(&mut rng);
        let expected = -(2.0 * 2f64.ln()).sqrt();
        assert!((z - expected).abs() < 1e-12);
    }

    #[test]
    fn test_standard_normal_moments() {
        let mut rng = Mulberry32::new(42);
        let n = 50_000;
        let samples: Vec<f64> = (0..n).map(|_| BoxMuller.sample(&mut rng)).collect();

        assert!(samples.iter().all(|z| z.is_finite()));

        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = samples.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.03, "mean was {mean}");
        assert!((variance - 1.0).abs() < 0.05, "variance was {variance}");
    }
}
