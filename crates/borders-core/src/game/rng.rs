//! Random target selection.
//!
//! Rounds only need "a different country each time", so a 64-bit linear
//! congruential generator seeded from the wall clock is enough.  The
//! [`RandomSource`] trait lets tests substitute a fixed sequence.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns an index in `0..len`.  `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Knuth's MMIX linear congruential generator.
#[derive(Debug, Clone, Copy)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    const INCREMENT: u64 = 1_442_695_040_888_963_407;

    /// Creates a generator with an explicit seed.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates a generator seeded from the current time.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64);
        Self::new(nanos)
    }

    /// Advances the generator and returns the new state.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

impl RandomSource for Lcg {
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // The low bits of a power-of-two LCG have short periods; use the high half.
        ((self.next_u64() >> 32) % len as u64) as usize
    }
}
