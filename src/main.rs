//! press-or-pass - terminal entry point
//!
//! Registers players (interactively or from `--player`), assigns strategy
//! ids by seat and plays the requested number of games.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use press_or_pass::cli::Console;
use press_or_pass::core::{GameRng, Result, SessionConfig};
use press_or_pass::{Advisor, Session, Unattended};

/// Push-your-luck dice game
#[derive(Parser, Debug)]
#[command(name = "press-or-pass")]
#[command(about = "Draw dice, bank points, and stop before you bust")]
struct Args {
    /// Strategy id per seat: 0 manual, 1 cautious, 2 measured, 3 short odds, 4 long odds
    strategies: Vec<u8>,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    games: u32,

    /// Random seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Player name; repeat for each seat. Skips interactive registration.
    #[arg(long = "player", short = 'p')]
    players: Vec<String>,

    /// Print dice without colour
    #[arg(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()) {
        tracing::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let advisors = args
        .strategies
        .iter()
        .map(|&id| Advisor::try_from(id))
        .collect::<Result<Vec<_>>>()?;

    let mut config = SessionConfig::default()
        .with_games(args.games)
        .with_advisors(advisors);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut console = Console::stdio(!args.no_color);
    let names = if args.players.is_empty() {
        console.register()?
    } else {
        args.players
    };

    let mut session = Session::new(names, &config)?;
    let mut rng = config.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    tracing::info!(seed = rng.seed(), games = config.games, "session starting");

    let all_automated = session.players().iter().all(|p| !p.advisor.is_manual());
    let report = if all_automated && config.games > 1 {
        session.play(config.games, &mut rng, &mut Unattended)?
    } else {
        session.play(config.games, &mut rng, &mut console)?
    };

    println!("Session over after {} game(s).", report.games.len());
    for (id, wins) in report.wins.iter() {
        println!("{}: {} win(s)", session.players()[id.index()].name, wins);
    }
    Ok(())
}
