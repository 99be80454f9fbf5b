//! Seeded 32-bit generator used for every simulated path.
//!
//! Each path owns its own generator, so paths can run on any thread without
//! sharing state.

use rand::{RngCore, SeedableRng};

const STATE_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 generator.
///
/// Small and fast, with a single 32-bit state word. Not suitable for
/// anything security related.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from an integer seed.
    ///
    /// Only the low 32 bits are used. A zero seed is replaced by one.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed as u32 };
        Self { state }
    }

    /// Uniform draw in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        unit_interval(self)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from(u32::from_le_bytes(seed)))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Maps one 32-bit draw onto `[0, 1)`.
pub fn unit_interval<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.next_u32()) / TWO_POW_32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::seed_from_u64(42);
        for _ in 0..1_000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = Mulberry32::new(42);
        let mut b = Mulberry32::new(43);
        let same = (0..100).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 5);
    }

    #[test]
    fn test_zero_seed_maps_to_one() {
        let mut zero = Mulberry32::new(0);
        let mut one = Mulberry32::new(1);
        assert_eq!(zero.next_u64(), one.next_u64());
    }

    #[test]
    fn test_from_seed_bytes() {
        let mut a = Mulberry32::from_seed(7u32.to_le_bytes());
        let mut b = Mulberry32::new(7);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn test_unit_draws_are_uniform() {
        let mut rng = Mulberry32::new(2024);
        let n = 20_000;
        let draws: Vec<f64> = (0..n).map(|_| rng.next_unit()).collect();

        assert!(draws.iter().all(|u| (0.0..1.0).contains(u)));

        let mean = draws.iter().sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean was {mean}");

        let below_tenth = draws.iter().filter(|u| **u < 0.1).count() as f64 / n as f64;
        assert!((below_tenth - 0.1).abs() < 0.01);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut rng = Mulberry32::new(5);
        let mut buf = [0u8; 7];
        rng.fill_bytes(&mut buf);

        let mut check = Mulberry32::new(5);
        let first = check.next_u32().to_le_bytes();
        let second = check.next_u32().to_le_bytes();
        assert_eq!(&buf[..4], &first);
        assert_eq!(&buf[4..], &second[..3]);
    }
}
