// src/random/sources.rs

use crate::random::traits::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use std::collections::VecDeque;

// =========================================================================
// 1. Uniform Source (RNG backed)
// =========================================================================

/// Draws from `Uniform[0, 1)` using any `rand` generator.
#[derive(Debug, Clone)]
pub struct UniformSource<R: Rng> {
    rng: R,
    unit: Uniform<f64>,
}

impl<R: Rng> UniformSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            unit: Uniform::new(0.0, 1.0),
        }
    }
}

impl UniformSource<StdRng> {
    /// Reproducible source: the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from OS entropy, for runs that do not need to be replayed.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Picks `seeded` when a seed is given, `from_entropy` otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for UniformSource<R> {
    fn next_draw(&mut self) -> Option<f64> {
        Some(self.unit.sample(&mut self.rng))
    }
}

// =========================================================================
// 2. Scripted Source
// =========================================================================

/// Replays a fixed list of draws in order, then reports exhaustion.
///
/// Used to reproduce a known sequence of days.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: VecDeque<f64>,
    consumed: usize,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            consumed: 0,
        }
    }

    /// How many draws have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_draw(&mut self) -> Option<f64> {
        let draw = self.draws.pop_front()?;
        self.consumed += 1;
        Some(draw)
    }
}
