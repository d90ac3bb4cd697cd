//! Randomness used when drawing serial digits and service indicators.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed random choices.
///
/// Every [`rand::Rng`] is a `DigitSource`, so `rand::rng()` and a seeded
/// [`StdRng`] both work. Tests can implement this directly to script exact
/// output.
pub trait DigitSource {
    /// Returns a decimal digit in `0..=9`.
    ///
    /// Values above 9 are not rejected: [`SerialNumber::random`] reduces
    /// every value modulo 10, so an implementation returning 13 yields 3.
    ///
    /// [`SerialNumber::random`]: crate::SerialNumber::random
    fn next_digit(&mut self) -> u8;

    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> DigitSource for R {
    fn next_digit(&mut self) -> u8 {
        self.random_range(0..10)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Returns a deterministic source for reproducible output.
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_digits_stay_in_range() {
        let mut source = seeded(7);
        for _ in 0..1_000 {
            assert!(source.next_digit() <= 9);
            assert!(source.pick(3) < 3);
        }
    }

    #[test]
    fn seeded_sources_repeat() {
        let a: Vec<u8> = {
            let mut s = seeded(42);
            (0..16).map(|_| s.next_digit()).collect()
        };
        let b: Vec<u8> = {
            let mut s = seeded(42);
            (0..16).map(|_| s.next_digit()).collect()
        };
        assert_eq!(a, b);
    }
}
