use clap::Parser;
use flagship_duel::{init_logging, MatchEngine, Strategy, TrialRunner, DEFAULT_TRIALS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Pit two torpedo command centers against each other", long_about = None)]
struct Cli {
    /// Number of independent matches to play.
    #[arg(long, default_value_t = DEFAULT_TRIALS as u64, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Strategy commanding your side.
    #[arg(long, value_enum, default_value_t = Strategy::Counter)]
    yours: Strategy,
    /// Strategy commanding the enemy side.
    #[arg(long, value_enum, default_value_t = Strategy::Evasive)]
    enemy: Strategy,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        log::info!("Using fixed seed: {} (run will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    log::info!(
        "{} trials: {:?} (yours) vs {:?} (enemy)",
        cli.trials,
        cli.yours,
        cli.enemy
    );

    let mut runner = TrialRunner::new(MatchEngine::new(rng), cli.yours.build(), cli.enemy.build());
    let tally = runner.run(cli.trials as usize)?;

    println!("Your wins to enemy's wins ratio is {}", tally.ratio());
    println!("{}", tally.tier().message());
    Ok(())
}
