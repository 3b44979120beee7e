//! Repeated independent matches and their aggregate score.

use crate::{
    command::CommandCenter,
    common::DuelError,
    config::{DECISIVE_WIN_RATIO, MARGINAL_WIN_RATIO},
    engine::MatchEngine,
    random::RandomSource,
};

/// Classification of a win ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Tier {
    Lost,
    MarginalWin,
    DecisiveWin,
}

impl Tier {
    /// `ratio < 1.0` loses, `1.0 <= ratio < 1.25` is marginal, anything
    /// else is decisive. Both boundaries belong to the higher tier. A NaN
    /// ratio fails both comparisons and lands in the decisive tier.
    pub fn classify(ratio: f64) -> Self {
        if ratio < MARGINAL_WIN_RATIO {
            Tier::Lost
        } else if ratio < DECISIVE_WIN_RATIO {
            Tier::MarginalWin
        } else {
            Tier::DecisiveWin
        }
    }

    /// Message shown to the strategy author.
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Lost => "You lost! Improve your battle logic!",
            Tier::MarginalWin => "You won by a small margin! Can you do better?",
            Tier::DecisiveWin => "Congratulations! Your victory is undeniable. Good job!",
        }
    }
}

/// Win counts accumulated over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Tally {
    pub trials: usize,
    pub your_wins: usize,
    pub enemy_wins: usize,
}

impl Tally {
    /// Our wins divided by the enemy's wins. Infinite when the enemy never
    /// won, NaN when nobody did.
    pub fn ratio(&self) -> f64 {
        self.your_wins as f64 / self.enemy_wins as f64
    }

    pub fn tier(&self) -> Tier {
        Tier::classify(self.ratio())
    }
}

/// Plays many matches between the same two command centers.
///
/// The command centers live for the whole runner, so any state they keep
/// carries over between matches and between runs.
pub struct TrialRunner<R: RandomSource, Y: CommandCenter, E: CommandCenter> {
    engine: MatchEngine<R>,
    yours: Y,
    enemy: E,
}

impl<R, Y, E> TrialRunner<R, Y, E>
where
    R: RandomSource,
    Y: CommandCenter,
    E: CommandCenter,
{
    pub fn new(engine: MatchEngine<R>, yours: Y, enemy: E) -> Self {
        Self {
            engine,
            yours,
            enemy,
        }
    }

    pub fn yours(&self) -> &Y {
        &self.yours
    }

    pub fn enemy(&self) -> &E {
        &self.enemy
    }

    /// Play `trials` matches and count the wins of each side.
    ///
    /// Counters start from zero on every call. The first error from a
    /// command center aborts the run.
    pub fn run(&mut self, trials: usize) -> Result<Tally, DuelError> {
        if trials == 0 {
            return Err(DuelError::NoTrials);
        }
        log::debug!(
            "starting {} trials: {} vs {}",
            trials,
            self.yours.name(),
            self.enemy.name()
        );

        let mut tally = Tally::default();
        for _ in 0..trials {
            let outcome = self.engine.play(&mut self.yours, &mut self.enemy)?;
            tally.trials += 1;
            if outcome.you_won() {
                tally.your_wins += 1;
            }
            if outcome.enemy_won() {
                tally.enemy_wins += 1;
            }
        }

        log::debug!(
            "finished {} trials: {} wins vs {} wins",
            tally.trials,
            tally.your_wins,
            tally.enemy_wins
        );
        Ok(tally)
    }

    /// Convenience for `run(trials)?.ratio()`.
    pub fn run_ratio(&mut self, trials: usize) -> Result<f64, DuelError> {
        Ok(self.run(trials)?.ratio())
    }

    /// Hand back the engine and both command centers.
    pub fn into_parts(self) -> (MatchEngine<R>, Y, E) {
        (self.engine, self.yours, self.enemy)
    }
}
