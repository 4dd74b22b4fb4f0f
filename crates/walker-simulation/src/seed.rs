//! Seed sourcing for the three random streams
//!
//! Seeds are injected through [`SeedProvider`] so that tests can use
//! [`FixedSeeds`] while interactive sessions use [`ClockSeeds`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Source of fresh 64-bit seeds
pub trait SeedProvider {
    fn next_seed(&mut self) -> u64;
}

/// Seeds derived from a high-resolution clock.
///
/// Wall-clock time alone has poor resolution on some platforms, so the
/// value is a monotonic `Instant` offset added to the wall-clock time at
/// creation. Two calls never yield the same seed.
#[derive(Debug, Clone)]
pub struct ClockSeeds {
    anchor: Instant,
    epoch_nanos: u64,
    last: u64,
}

impl Default for ClockSeeds {
    fn default() -> Self {
        let epoch_nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self {
            anchor: Instant::now(),
            epoch_nanos,
            last: 0,
        }
    }
}

impl SeedProvider for ClockSeeds {
    fn next_seed(&mut self) -> u64 {
        let now = self
            .epoch_nanos
            .wrapping_add(self.anchor.elapsed().as_nanos() as u64);
        let seed = if now <= self.last {
            self.last.wrapping_add(1)
        } else {
            now
        };
        self.last = seed;
        seed
    }
}

/// Deterministic seeds `base, base + 1, base + 2, …`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeeds {
    next: u64,
}

impl FixedSeeds {
    pub fn new(base: u64) -> Self {
        Self { next: base }
    }
}

impl SeedProvider for FixedSeeds {
    fn next_seed(&mut self) -> u64 {
        let seed = self.next;
        self.next = self.next.wrapping_add(1);
        seed
    }
}

/// Seeds of the three independent random streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedTriple {
    pub start_positions: u64,
    pub relation_mask: u64,
    pub relation_matrix: u64,
}

impl SeedTriple {
    /// Three consecutive seeds from `provider`
    pub fn draw(provider: &mut dyn SeedProvider) -> Self {
        Self {
            start_positions: provider.next_seed(),
            relation_mask: provider.next_seed(),
            relation_matrix: provider.next_seed(),
        }
    }
}

/// Fresh generator for one stage. Every generation restarts from its seed,
/// so regenerating with an unchanged seed reproduces the same values.
pub fn stage_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform sample in `[avg - var, avg + var)`.
///
/// With `var == 0` the result is exactly `avg`.
#[inline]
pub fn spread_sample(rng: &mut impl Rng, avg: f64, var: f64) -> f64 {
    var * (2.0 * rng.random::<f64>() - 1.0) + avg
}
