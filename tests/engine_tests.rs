use std::cell::RefCell;
use std::rc::Rc;

use flagship_duel::{
    BaselineCommand, CommandCenter, DuelError, FixedCommand, Fleet, MatchEngine, MatchOutcome,
    RandomSource, ScriptedSource, TorpedoAttack,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn fixed(source: usize, target: usize, delta: i32) -> FixedCommand {
    FixedCommand::new(source, target, delta).unwrap()
}

#[test]
fn test_both_flagships_at_zero_are_both_hit() {
    let mut engine = MatchEngine::new(ScriptedSource::constant(0));
    let (mut yours, mut enemy) = (fixed(0, 0, 0), fixed(0, 0, 0));
    for _ in 0..10 {
        let outcome = engine.play(&mut yours, &mut enemy).unwrap();
        assert_eq!(
            outcome,
            MatchOutcome {
                your_flagship_hit: true,
                enemy_flagship_hit: true
            }
        );
        assert!(outcome.you_won() && outcome.enemy_won());
    }
}

#[test]
fn test_flagships_away_from_zero_are_both_missed() {
    let mut engine = MatchEngine::new(ScriptedSource::new(vec![2, 3]));
    let (mut yours, mut enemy) = (fixed(0, 0, 0), fixed(0, 0, 0));
    let engagement = engine.play_detailed(&mut yours, &mut enemy).unwrap();
    assert_eq!(engagement.your_fleet.flagship(), 2);
    assert_eq!(engagement.enemy_fleet.flagship(), 3);
    assert!(!engagement.outcome.your_flagship_hit);
    assert!(!engagement.outcome.enemy_flagship_hit);
}

#[test]
fn test_sides_are_scored_independently() {
    // your flagship at 0, enemy flagship at 4
    let mut engine = MatchEngine::new(ScriptedSource::new(vec![0, 4]));
    let mut yours = fixed(2, 4, 0);
    let mut enemy = fixed(1, 3, 1);
    let engagement = engine.play_detailed(&mut yours, &mut enemy).unwrap();
    assert_eq!(engagement.your_impact, 4);
    assert_eq!(engagement.enemy_impact, 4);
    assert!(engagement.outcome.you_won());
    assert!(!engagement.outcome.enemy_won());
}

#[test]
fn test_out_of_range_impacts_miss_on_both_sides() {
    let mut engine = MatchEngine::new(ScriptedSource::new(vec![4, 0]));
    let mut yours = fixed(0, 0, -1);
    let mut enemy = fixed(0, 4, 1);
    let engagement = engine.play_detailed(&mut yours, &mut enemy).unwrap();
    assert_eq!(engagement.your_impact, -1);
    assert_eq!(engagement.enemy_impact, 5);
    assert_eq!(
        engagement.outcome,
        MatchOutcome {
            your_flagship_hit: false,
            enemy_flagship_hit: false
        }
    );
}

#[test]
fn test_delta_folds_through_remainder() {
    let mut engine = MatchEngine::new(ScriptedSource::constant(1));
    let mut yours = fixed(0, 0, 3);
    let mut enemy = fixed(0, 3, -2);
    let engagement = engine.play_detailed(&mut yours, &mut enemy).unwrap();
    assert_eq!(engagement.your_impact, 1);
    assert_eq!(engagement.enemy_impact, 3);
    assert!(engagement.outcome.you_won());
    assert!(!engagement.outcome.enemy_won());
}

struct Rogue;

impl CommandCenter for Rogue {
    fn fire_torpedo(
        &mut self,
        _rng: &mut dyn RandomSource,
        _ships: &Fleet,
    ) -> Result<TorpedoAttack, DuelError> {
        TorpedoAttack::new(0, 5)
    }
}

#[test]
fn test_invalid_attack_aborts_match() {
    let mut engine = MatchEngine::new(SmallRng::seed_from_u64(1));
    let err = engine.play(&mut BaselineCommand::new(), &mut Rogue).unwrap_err();
    assert_eq!(err, DuelError::SlotOutOfRange { index: 5 });
}

/// Records every call into a log shared by both sides.
struct Recorder {
    side: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl CommandCenter for Recorder {
    fn fire_torpedo(
        &mut self,
        _rng: &mut dyn RandomSource,
        ships: &Fleet,
    ) -> Result<TorpedoAttack, DuelError> {
        self.log.borrow_mut().push(format!("{} fire", self.side));
        TorpedoAttack::new(ships.flagship(), 2)
    }

    fn guide_torpedo(&mut self, _rng: &mut dyn RandomSource, _attack: &TorpedoAttack) -> i32 {
        self.log.borrow_mut().push(format!("{} guide", self.side));
        0
    }

    fn on_torpedo_detected(&mut self, attack: &TorpedoAttack) {
        self.log
            .borrow_mut()
            .push(format!("{} detect {}", self.side, attack.source()));
    }
}

#[test]
fn test_protocol_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut yours = Recorder {
        side: "yours",
        log: Rc::clone(&log),
    };
    let mut enemy = Recorder {
        side: "enemy",
        log: Rc::clone(&log),
    };
    // your flagship at 1, enemy flagship at 3
    let mut engine = MatchEngine::new(ScriptedSource::new(vec![1, 3]));
    engine.play(&mut yours, &mut enemy).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "yours fire",
            "enemy detect 1",
            "enemy fire",
            "yours detect 3",
            "yours guide",
            "enemy guide",
        ]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn valid_attacks_never_fail(
        seed in any::<u64>(),
        your_source in 0..5usize,
        your_target in 0..5usize,
        enemy_source in 0..5usize,
        enemy_target in 0..5usize,
        your_delta in -4..=4i32,
        enemy_delta in -4..=4i32,
    ) {
        let mut engine = MatchEngine::new(SmallRng::seed_from_u64(seed));
        let mut yours = fixed(your_source, your_target, your_delta);
        let mut enemy = fixed(enemy_source, enemy_target, enemy_delta);
        let e = engine.play_detailed(&mut yours, &mut enemy).unwrap();

        prop_assert_eq!(e.your_impact, your_target as i32 + your_delta % 2);
        prop_assert_eq!(e.enemy_impact, enemy_target as i32 + enemy_delta % 2);
        prop_assert_eq!(
            e.outcome.enemy_flagship_hit,
            e.your_impact == e.enemy_fleet.flagship() as i32
        );
        prop_assert_eq!(
            e.outcome.your_flagship_hit,
            e.enemy_impact == e.your_fleet.flagship() as i32
        );
    }
}
