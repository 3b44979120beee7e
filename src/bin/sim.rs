use flagship_duel::{MatchEngine, Strategy, TrialRunner};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <trials> <seed>", args[0]);
        std::process::exit(1);
    }
    let trials: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let (yours, enemy) = (Strategy::Counter, Strategy::Evasive);
    let engine = MatchEngine::new(SmallRng::seed_from_u64(seed));
    let mut runner = TrialRunner::new(engine, yours.build(), enemy.build());
    let tally = runner.run(trials)?;

    // JSON has no infinity
    let ratio = Some(tally.ratio()).filter(|r| r.is_finite());
    let result = json!({
        "yours": yours,
        "enemy": enemy,
        "seed": seed,
        "tally": tally,
        "ratio": ratio,
        "tier": tally.tier(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
