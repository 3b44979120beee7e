use crate::{
    attack::TorpedoAttack, command::CommandCenter, common::DuelError, fleet::Fleet,
    random::RandomSource,
};

/// Result of one match. Both sides are scored independently, so both, one
/// or neither flagship may be hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchOutcome {
    pub your_flagship_hit: bool,
    pub enemy_flagship_hit: bool,
}

impl MatchOutcome {
    /// We win a match when our torpedo hits the enemy flagship.
    pub fn you_won(&self) -> bool {
        self.enemy_flagship_hit
    }

    /// The enemy wins a match when its torpedo hits our flagship.
    pub fn enemy_won(&self) -> bool {
        self.your_flagship_hit
    }
}

/// Full record of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Engagement {
    pub your_fleet: Fleet,
    pub enemy_fleet: Fleet,
    pub your_attack: TorpedoAttack,
    pub enemy_attack: TorpedoAttack,
    pub your_delta: i32,
    pub enemy_delta: i32,
    pub your_impact: i32,
    pub enemy_impact: i32,
    pub outcome: MatchOutcome,
}

/// Runs single matches between two command centers.
///
/// Owns the random source used for fleet placement and lends it to the
/// command centers on every call.
pub struct MatchEngine<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> MatchEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mutable access to the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Play one match and report which flagships were hit.
    pub fn play<Y, E>(&mut self, yours: &mut Y, enemy: &mut E) -> Result<MatchOutcome, DuelError>
    where
        Y: CommandCenter + ?Sized,
        E: CommandCenter + ?Sized,
    {
        Ok(self.play_detailed(yours, enemy)?.outcome)
    }

    /// Play one match, keeping every intermediate value.
    ///
    /// The steps always run in this order: place both fleets, our fire and
    /// the enemy's detection, the enemy's fire and our detection, both
    /// guidance calls, resolution. Any error from a command center aborts
    /// the match.
    pub fn play_detailed<Y, E>(
        &mut self,
        yours: &mut Y,
        enemy: &mut E,
    ) -> Result<Engagement, DuelError>
    where
        Y: CommandCenter + ?Sized,
        E: CommandCenter + ?Sized,
    {
        let rng: &mut dyn RandomSource = &mut self.rng;

        let your_fleet = Fleet::random(rng);
        let enemy_fleet = Fleet::random(rng);

        // We fire first.
        let your_attack = yours.fire_torpedo(rng, &your_fleet)?;
        enemy.on_torpedo_detected(&your_attack);

        let enemy_attack = enemy.fire_torpedo(rng, &enemy_fleet)?;
        yours.on_torpedo_detected(&enemy_attack);

        let your_delta = yours.guide_torpedo(rng, &your_attack);
        let enemy_delta = enemy.guide_torpedo(rng, &enemy_attack);
        let your_impact = your_attack.impact(your_delta);
        let enemy_impact = enemy_attack.impact(enemy_delta);

        let outcome = MatchOutcome {
            your_flagship_hit: your_fleet.is_hit(enemy_impact),
            enemy_flagship_hit: enemy_fleet.is_hit(your_impact),
        };

        let engagement = Engagement {
            your_fleet,
            enemy_fleet,
            your_attack,
            enemy_attack,
            your_delta,
            enemy_delta,
            your_impact,
            enemy_impact,
            outcome,
        };
        log::trace!("{:?}", engagement);
        Ok(engagement)
    }
}
