//! Torpedo attacks and the guidance rule that turns them into an impact index.

use crate::common::DuelError;
use crate::config::NUM_SLOTS;

/// A fired torpedo: the slot it left from and the slot it was aimed at
/// before guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TorpedoAttack {
    source: usize,
    target: usize,
}

impl TorpedoAttack {
    /// Create an attack, rejecting a source or target outside `0..NUM_SLOTS`.
    pub fn new(source: usize, target: usize) -> Result<Self, DuelError> {
        for index in [source, target] {
            if index >= NUM_SLOTS {
                return Err(DuelError::SlotOutOfRange { index });
            }
        }
        Ok(Self { source, target })
    }

    /// Slot of the firing ship.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Slot the torpedo was aimed at.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Final impact index after applying a guidance delta.
    pub fn impact(&self, delta: i32) -> i32 {
        impact_index(self.target, delta)
    }
}

/// `target + delta % 2`, using Rust's truncated remainder.
///
/// The remainder keeps the sign of the delta, so `-1` stays `-1` and the
/// rule is the identity on `{-1, 0, 1}`. Deltas outside that set fold onto
/// it (`2 -> 0`, `3 -> 1`, `-3 -> -1`). Strategies are tuned against these
/// exact values; do not switch to `rem_euclid`. The result is not clamped.
pub fn impact_index(target: usize, delta: i32) -> i32 {
    target as i32 + delta % 2
}
