//! Deterministic PRNG based on the Mulberry32 algorithm.
//!
//! Provides a small, seedable pseudo-random number generator whose output is
//! bit-compatible with the widely used JavaScript `mulberry32` function. Same
//! seed always produces the same sequence of values on every platform: the
//! mixing is pure 32-bit wrapping integer arithmetic, and the only floating
//! point step is an exact division by 2^32.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Mulberry32 deterministic PRNG. Same seed always produces the same sequence.
///
/// The whole state is one 32-bit register. Every draw adds the odd constant
/// `0x6D2B79F5` to it and runs two xorshift-multiply rounds over the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Weyl increment added to the state on every draw.
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// 2^32, the divisor mapping a `u32` onto [0, 1).
    const TWO_POW_32: f64 = 4_294_967_296.0;

    /// Creates a new PRNG with the given seed.
    ///
    /// The seed is reduced modulo 2^32, so `-1` and `0xFFFF_FFFF` select the
    /// same stream. This matches how JavaScript coerces an integral seed with
    /// `seed | 0`.
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u32 }
    }

    /// Creates a PRNG seeded from the wall clock and the thread-local
    /// entropy source.
    ///
    /// The nanosecond timestamp is folded to 32 bits and XORed with a random
    /// `u32`, so two generators created in the same instant still diverge.
    pub fn from_entropy() -> Self {
        Self::new(i64::from(entropy_seed()))
    }

    /// Current value of the state register.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state and returns the next mixed 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::TWO_POW_32
    }

    /// Returns `floor(next_f64() * max)`, a value in [0, max).
    ///
    /// `max` must be non-zero; `next_int(0)` consumes a draw and returns 0.
    pub fn next_int(&mut self, max: usize) -> usize {
        // Non-negative product, so truncation is floor.
        (self.next_f64() * max as f64) as usize
    }
}

/// Seed material for unseeded generators.
fn entropy_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    ((nanos ^ (nanos >> 32)) as u32) ^ rand::rng().random::<u32>()
}
