//! Deterministic RNG based on splitmix64. Seeded explicitly or from OS entropy.

use crate::error::LifeError;

#[inline]
pub fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Fresh 64-bit seed from the operating system.
pub fn entropy_seed() -> Result<u64, LifeError> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf)?;
    Ok(u64::from_ne_bytes(buf))
}

/// Simple sequential RNG for seed placement.
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = splitmix64(self.state);
        self.state
    }

    /// Uniform in `[0, max)`. Rejects the biased tail instead of taking a plain modulo.
    pub fn range_usize(&mut self, max: usize) -> usize {
        debug_assert!(max > 0);
        let max = max as u64;
        let zone = u64::MAX - (u64::MAX % max);
        loop {
            let v = self.next_u64();
            if v < zone {
                return (v % max) as usize;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = Rng::new(42);
        for max in [1usize, 2, 3, 7, 100] {
            for _ in 0..200 {
                assert!(rng.range_usize(max) < max);
            }
        }
    }

    #[test]
    fn range_hits_every_value() {
        let mut rng = Rng::new(1);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[rng.range_usize(5)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
