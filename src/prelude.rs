//! Commonly used types and utilities for ease of import.

pub use crate::{
    BaselineCommand, CommandCenter, CounterCommand, DuelError, EvasiveCommand, FixedCommand, Fleet,
    MatchEngine, MatchOutcome, RandomSource, Strategy, Tally, Tier, TorpedoAttack, TrialRunner,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
