use crate::{attack::TorpedoAttack, common::DuelError, fleet::Fleet, random::RandomSource};

/// Strategy controlling one side of a duel.
///
/// The engine calls each method exactly once per match, in this order for
/// each side: `fire_torpedo`, then `on_torpedo_detected` with the opponent's
/// attack, then `guide_torpedo`. One instance is reused for every match of a
/// run, so fields may carry knowledge from one match to the next.
///
/// The provided methods are the baseline policy: fire from the flagship at
/// a random slot, guide by a random delta, ignore the opponent.
pub trait CommandCenter {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str {
        "baseline"
    }

    /// Pick the firing ship and the initial target. `ships` is this side's
    /// own fleet; nothing about the opponent is known yet.
    fn fire_torpedo(
        &mut self,
        rng: &mut dyn RandomSource,
        ships: &Fleet,
    ) -> Result<TorpedoAttack, DuelError> {
        TorpedoAttack::new(ships.flagship(), rng.below(ships.slots().len()))
    }

    /// Course correction for our own torpedo, expected in `{-1, 0, 1}`.
    fn guide_torpedo(&mut self, rng: &mut dyn RandomSource, _attack: &TorpedoAttack) -> i32 {
        rng.correction()
    }

    /// The opponent's attack for the current match.
    fn on_torpedo_detected(&mut self, _attack: &TorpedoAttack) {}
}

/// Command center running the baseline policy unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaselineCommand;

impl BaselineCommand {
    pub fn new() -> Self {
        Self
    }
}

impl CommandCenter for BaselineCommand {}

impl<C: CommandCenter + ?Sized> CommandCenter for &mut C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fire_torpedo(
        &mut self,
        rng: &mut dyn RandomSource,
        ships: &Fleet,
    ) -> Result<TorpedoAttack, DuelError> {
        (**self).fire_torpedo(rng, ships)
    }

    fn guide_torpedo(&mut self, rng: &mut dyn RandomSource, attack: &TorpedoAttack) -> i32 {
        (**self).guide_torpedo(rng, attack)
    }

    fn on_torpedo_detected(&mut self, attack: &TorpedoAttack) {
        (**self).on_torpedo_detected(attack)
    }
}

impl<C: CommandCenter + ?Sized> CommandCenter for alloc::boxed::Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fire_torpedo(
        &mut self,
        rng: &mut dyn RandomSource,
        ships: &Fleet,
    ) -> Result<TorpedoAttack, DuelError> {
        (**self).fire_torpedo(rng, ships)
    }

    fn guide_torpedo(&mut self, rng: &mut dyn RandomSource, attack: &TorpedoAttack) -> i32 {
        (**self).guide_torpedo(rng, attack)
    }

    fn on_torpedo_detected(&mut self, attack: &TorpedoAttack) {
        (**self).on_torpedo_detected(attack)
    }
}
