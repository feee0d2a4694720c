//! Headless AI-vs-AI round robin: every pair of tiers, seats alternated.
//!
//! Usage: selfplay [games] [rows] [cols] [seed]

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use dots_and_boxes::ai::Difficulty;
use dots_and_boxes::game::{Game, GameMode, Winner};

#[derive(Default)]
struct Tally {
    wins: usize,
    losses: usize,
    ties: usize,
}

fn arg_or<T: std::str::FromStr>(args: &[String], idx: usize, name: &str, default: T) -> T {
    let Some(raw) = args.get(idx) else { return default };
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            warn!("ignoring bad {} {:?}", name, raw);
            default
        }
    }
}

/// Play one match to the end. Returns the finished game.
fn play(rows: usize, cols: usize, tiers: [Difficulty; 2], rng: &mut StdRng) -> Game {
    let mut game = Game::new(GameMode::AiVsAi, rows, cols, tiers);
    while game.play_ai_turn(rng).is_some() {}
    game
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(LevelFilter::INFO)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let games: usize = arg_or(&args, 0, "games", 20);
    let rows: usize = arg_or(&args, 1, "rows", 5).clamp(1, dots_and_boxes::constants::MAX_BOARD_SIDE);
    let cols: usize = arg_or(&args, 2, "cols", 5).clamp(1, dots_and_boxes::constants::MAX_BOARD_SIDE);
    let seed: u64 = arg_or(&args, 3, "seed", 0);

    info!("{} games per pairing on {}x{}, seed {}", games, rows, cols, seed);
    let mut rng = StdRng::seed_from_u64(seed);

    println!("{:<8} {:<8} {:>6} {:>6} {:>6}", "tier", "vs", "won", "lost", "tied");
    for a in Difficulty::ALL {
        for b in Difficulty::ALL {
            if a == b { continue; }
            let mut tally = Tally::default();
            for i in 0..games {
                // Alternate who moves first
                let a_seat = i % 2;
                let mut tiers = [b; 2];
                tiers[a_seat] = a;
                let game = play(rows, cols, tiers, &mut rng);
                match game.winner() {
                    Winner::Player(p) if p == a_seat => tally.wins += 1,
                    Winner::Player(_) => tally.losses += 1,
                    Winner::Tie => tally.ties += 1,
                }
            }
            println!(
                "{:<8} {:<8} {:>6} {:>6} {:>6}",
                a.label(), b.label(), tally.wins, tally.losses, tally.ties
            );
        }
    }
}
