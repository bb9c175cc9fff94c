use blackjack::{BlackjackError, Deck, GameEngine, Participant};
use clap::Parser;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use std::io;

mod console;
use console::{Narrator, Prompt};

#[derive(Parser)]
#[command(name = "blackjack-cli", about = "Single-deck blackjack against the dealer")]
struct Cli {
    /// Seed for a reproducible shuffle (random when omitted)
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Games to play, each with a fresh deck
    #[arg(
        long,
        env = "BLACKJACK_ROUNDS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    rounds: u32,
}

#[derive(Default)]
struct Tally {
    player: u32,
    dealer: u32,
    pushes: u32,
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        log::error!("Game aborted: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), BlackjackError> {
    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("Using shuffle seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    let mut narrator = Narrator::new(io::stdout());
    let mut tally = Tally::default();

    for round in 1..=cli.rounds {
        if cli.rounds > 1 {
            narrator.line(&format!("===== Game {round} of {} =====", cli.rounds))?;
        }

        let mut engine = GameEngine::new(Deck::shuffled(&mut rng));
        let outcome = engine.play(&mut prompt, &mut narrator)?;
        match outcome.winner() {
            Some(Participant::Player) => tally.player += 1,
            Some(Participant::Dealer) => tally.dealer += 1,
            None => tally.pushes += 1,
        }
    }

    if cli.rounds > 1 {
        narrator.line(&format!(
            "You won {}, dealer won {}, pushes {}",
            tally.player, tally.dealer, tally.pushes
        ))?;
    }
    Ok(())
}
