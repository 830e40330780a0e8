//! Uniform sampling source consumed by the generators.
//!
//! The generators never touch a random number generator directly. They draw
//! through [`UniformSampler`], so any `rand` generator can be plugged in via
//! [`RandSampler`] and tests can replay exact sequences with
//! [`ScriptedSampler`].
//!
//! A sampler is not shared between threads: parallel generation gives each
//! worker its own sampler (e.g. the thread-local `rand` generator).

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng, thread_rng};
use rand_distr::{Distribution, Uniform};

use super::environment::Environment;
use super::types::Point;

/// Source of independent, uniformly distributed draws.
pub trait UniformSampler {
    /// Draw a real number uniformly from the closed interval `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Draw an index uniformly from `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Pick one element of a non-empty slice uniformly.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        &items[self.choose_index(items.len())]
    }

    /// Fair coin flip, drawn as a choice over `{true, false}`.
    fn coin(&mut self) -> bool {
        self.choose_index(2) == 0
    }

    /// Uniform point within the environment bounds (x drawn before y).
    fn point_within(&mut self, environment: &Environment) -> Point {
        let x = environment.x_bounds();
        let y = environment.y_bounds();
        Point {
            x: self.uniform(x.min, x.max),
            y: self.uniform(y.min, y.max),
        }
    }
}

impl<S: UniformSampler + ?Sized> UniformSampler for &mut S {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// Adapter from any `rand` generator to [`UniformSampler`].
#[derive(Debug, Clone)]
pub struct RandSampler<R> {
    rng: R,
}

impl<R: Rng> RandSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandSampler<StdRng> {
    /// Reproducible sampler: equal seeds yield equal draw sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandSampler<ThreadRng> {
    fn default() -> Self {
        Self::new(thread_rng())
    }
}

impl<R: Rng> UniformSampler for RandSampler<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        Uniform::new_inclusive(low, high).sample(&mut self.rng)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Deterministic sampler replaying a fixed cycle of unit fractions.
///
/// Each draw consumes the next fraction `u` in `[0, 1]`:
/// `uniform(low, high)` yields `low + u * (high - low)` and
/// `choose_index(len)` yields `floor(u * len)` clamped to `len - 1`.
/// The script wraps around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    script: Vec<f64>,
    cursor: usize,
}

impl ScriptedSampler {
    /// Build a sampler from unit fractions. Values are clamped to `[0, 1]`;
    /// an empty script behaves like a script of a single `0.0`.
    pub fn new(script: impl IntoIterator<Item = f64>) -> Self {
        let mut script: Vec<f64> = script.into_iter().map(|u| u.clamp(0.0, 1.0)).collect();
        if script.is_empty() {
            script.push(0.0);
        }
        Self { script, cursor: 0 }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_fraction(&mut self) -> f64 {
        let u = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        u
    }
}

impl UniformSampler for ScriptedSampler {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let u = self.next_fraction();
        low + u * (high - low)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        let u = self.next_fraction();
        ((u * len as f64) as usize).min(len.saturating_sub(1))
    }
}
