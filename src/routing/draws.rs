use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of uniform integer draws used by routing and simulated banks.
pub trait DrawSource: Send {
    /// Returns a value in `[0, upper)`. Callers never pass `upper == 0`.
    fn draw_below(&mut self, upper: u64) -> u64;
}

/// Draws backed by a `rand` generator.
pub struct RngDraws<R = StdRng> {
    rng: R,
}

impl RngDraws<StdRng> {
    /// Seeds from OS entropy, so every process start gets a fresh sequence.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> RngDraws<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + Send> DrawSource for RngDraws<R> {
    fn draw_below(&mut self, upper: u64) -> u64 {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each value is reduced modulo `upper` so a script never produces an
/// out-of-range draw.
#[derive(Debug, Clone)]
pub struct FixedDraws {
    values: Vec<u64>,
    next: usize,
}

impl FixedDraws {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            next: 0,
        }
    }
}

impl DrawSource for FixedDraws {
    fn draw_below(&mut self, upper: u64) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % upper
    }
}
