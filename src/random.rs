//! Uniform integer source shared by the engine and any command center that
//! wants randomness.
//!
//! Every `rand::Rng` is a [`RandomSource`]. [`ScriptedSource`] replays a fixed
//! list of values so matches can be made fully deterministic in tests.

use alloc::vec::Vec;
use rand::Rng;

/// Uniform integer generator.
pub trait RandomSource {
    /// Uniform value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Uniform course correction in `{-1, 0, 1}`.
    fn correction(&mut self) -> i32 {
        self.below(3) as i32 - 1
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.below(2) == 1
    }
}

impl<R: Rng> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// Replays a script of values in order, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound, so a script of `[0]`
/// always yields the lowest value of any range. An empty script behaves
/// like `[0]`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Source that always yields `value` (reduced by the bound).
    pub fn constant(value: usize) -> Self {
        Self::new(alloc::vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        value % bound
    }
}
