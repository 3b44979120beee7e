//! Common error type shared by the fleet, attack, engine and trial modules.

/// Errors returned by duel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelError {
    /// A ship slot index (flagship, torpedo source or target) is outside `0..NUM_SLOTS`.
    SlotOutOfRange { index: usize },
    /// A run was requested with zero trials.
    NoTrials,
}

impl core::fmt::Display for DuelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DuelError::SlotOutOfRange { index } => {
                write!(f, "Slot index {} is out of range", index)
            }
            DuelError::NoTrials => write!(f, "Trial count must be positive"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DuelError {}
