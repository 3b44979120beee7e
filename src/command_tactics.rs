//! Command centers that improve on, or pin down, the baseline policy.

use alloc::boxed::Box;

use crate::{
    attack::TorpedoAttack,
    command::{BaselineCommand, CommandCenter},
    common::DuelError,
    config::NUM_SLOTS,
    fleet::Fleet,
    random::RandomSource,
};

/// Hides its flagship and keeps its torpedo inside the row.
///
/// Never fires from the flagship, so the firing source gives nothing away,
/// and never fires from the slot the opponent just aimed at. Guidance is
/// random only when the target has a neighbour on both sides; edge targets
/// are held so the torpedo always lands on some ship.
#[derive(Debug, Default, Clone)]
pub struct EvasiveCommand {
    attacked_slot: Option<usize>,
}

impl EvasiveCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommandCenter for EvasiveCommand {
    fn name(&self) -> &'static str {
        "evasive"
    }

    fn fire_torpedo(
        &mut self,
        rng: &mut dyn RandomSource,
        ships: &Fleet,
    ) -> Result<TorpedoAttack, DuelError> {
        let flagship = ships.flagship();
        let attacked = self.attacked_slot;
        let allowed = |s: &usize| *s != flagship && Some(*s) != attacked;
        // At most two slots are excluded, so at least three remain.
        let candidates = (0..NUM_SLOTS).filter(allowed).count();
        let pick = rng.below(candidates);
        let source = (0..NUM_SLOTS)
            .filter(allowed)
            .nth(pick)
            .ok_or(DuelError::SlotOutOfRange { index: pick })?;
        TorpedoAttack::new(source, rng.below(NUM_SLOTS))
    }

    fn guide_torpedo(&mut self, rng: &mut dyn RandomSource, attack: &TorpedoAttack) -> i32 {
        if (1..NUM_SLOTS - 1).contains(&attack.target()) {
            rng.correction()
        } else {
            0
        }
    }

    fn on_torpedo_detected(&mut self, attack: &TorpedoAttack) {
        self.attacked_slot = Some(attack.target());
    }
}

/// Exploits an opponent that never fires from its flagship.
///
/// Aims at an inner slot so either correction stays in the row, always
/// corrects (the initial target is never worth keeping), and steers away
/// from the slot the opponent fired from since that slot cannot be its
/// flagship.
#[derive(Debug, Default, Clone)]
pub struct CounterCommand {
    enemy_source: Option<usize>,
}

impl CounterCommand {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommandCenter for CounterCommand {
    fn name(&self) -> &'static str {
        "counter"
    }

    fn fire_torpedo(
        &mut self,
        rng: &mut dyn RandomSource,
        _ships: &Fleet,
    ) -> Result<TorpedoAttack, DuelError> {
        TorpedoAttack::new(rng.below(NUM_SLOTS), rng.below(NUM_SLOTS - 2) + 1)
    }

    fn guide_torpedo(&mut self, rng: &mut dyn RandomSource, attack: &TorpedoAttack) -> i32 {
        let target = attack.target();
        match self.enemy_source {
            Some(source) if source == target + 1 => -1,
            Some(source) if source + 1 == target => 1,
            _ if rng.coin() => -1,
            _ => 1,
        }
    }

    fn on_torpedo_detected(&mut self, attack: &TorpedoAttack) {
        self.enemy_source = Some(attack.source());
    }
}

/// Always fires the same attack and applies the same correction.
#[derive(Debug, Clone, Copy)]
pub struct FixedCommand {
    attack: TorpedoAttack,
    delta: i32,
}

impl FixedCommand {
    pub fn new(source: usize, target: usize, delta: i32) -> Result<Self, DuelError> {
        Ok(Self {
            attack: TorpedoAttack::new(source, target)?,
            delta,
        })
    }
}

impl CommandCenter for FixedCommand {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn fire_torpedo(
        &mut self,
        _rng: &mut dyn RandomSource,
        _ships: &Fleet,
    ) -> Result<TorpedoAttack, DuelError> {
        Ok(self.attack)
    }

    fn guide_torpedo(&mut self, _rng: &mut dyn RandomSource, _attack: &TorpedoAttack) -> i32 {
        self.delta
    }
}

/// Selectable built-in command centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Strategy {
    Baseline,
    Evasive,
    Counter,
}

impl Strategy {
    /// Fresh command center running this strategy.
    pub fn build(self) -> Box<dyn CommandCenter> {
        match self {
            Strategy::Baseline => Box::new(BaselineCommand::new()),
            Strategy::Evasive => Box::new(EvasiveCommand::new()),
            Strategy::Counter => Box::new(CounterCommand::new()),
        }
    }
}
