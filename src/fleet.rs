//! A side's row of ship slots with exactly one flagship.

use core::fmt;

use crate::common::DuelError;
use crate::config::NUM_SLOTS;
use crate::random::RandomSource;

/// Five ship slots; `true` marks the flagship.
///
/// The only constructors place exactly one flagship and there is no way to
/// mutate a fleet afterwards, so every `Fleet` holds exactly one `true` slot.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    slots: [bool; NUM_SLOTS],
}

impl Fleet {
    /// Fleet with the flagship at `index`.
    pub fn with_flagship(index: usize) -> Result<Self, DuelError> {
        if index >= NUM_SLOTS {
            return Err(DuelError::SlotOutOfRange { index });
        }
        let mut slots = [false; NUM_SLOTS];
        slots[index] = true;
        Ok(Self { slots })
    }

    /// Fleet with the flagship at a uniformly random slot.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        let mut slots = [false; NUM_SLOTS];
        slots[rng.below(NUM_SLOTS)] = true;
        Self { slots }
    }

    /// Read-only view of the slots.
    pub fn slots(&self) -> &[bool; NUM_SLOTS] {
        &self.slots
    }

    /// Index of the flagship.
    pub fn flagship(&self) -> usize {
        // Construction guarantees a flagship exists.
        self.slots.iter().position(|&s| s).unwrap_or_default()
    }

    /// Whether a torpedo landing at `impact` hits the flagship. Impacts
    /// outside the row, on either end, are misses.
    pub fn is_hit(&self, impact: i32) -> bool {
        usize::try_from(impact)
            .ok()
            .and_then(|i| self.slots.get(i))
            .copied()
            .unwrap_or(false)
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &slot in self.slots.iter() {
            write!(f, "{}", if slot { "[*]" } else { "[ ]" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_draws_the_row() {
        let fleet = Fleet::with_flagship(1).unwrap();
        assert_eq!(format!("{:?}", fleet), "[ ][*][ ][ ][ ]");
    }
}
