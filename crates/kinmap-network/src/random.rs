//! Injectable random source.
//!
//! The `RandomSource` trait abstracts over uniform float generation.
//! Implementations:
//! - `RngSource`: any `rand::Rng`, thread-local or seeded `StdRng`
//! - `SequenceSource`: replays a fixed list of draws (tests)

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Trait for uniform random draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Bernoulli trial: true with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform integer in `lo..=hi`. An empty range yields `lo` without a draw.
    fn int_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        if hi < lo {
            return lo;
        }
        let span = (hi - lo + 1) as f64;
        // A draw of exactly 1.0 from a misbehaving source must not overflow the range.
        lo + ((self.next_f64() * span).floor() as usize).min(hi - lo)
    }

    /// Uniform offset in `[-amplitude, amplitude)`.
    fn jitter(&mut self, amplitude: f64) -> f64 {
        self.next_f64() * 2.0 * amplitude - amplitude
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapter from a `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Unseeded thread-local generator; differs between calls.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// An empty list behaves like a constant 0.0 source.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
