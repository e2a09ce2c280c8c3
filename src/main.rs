//! Command-line move picker.
//!
//! Usage:
//! `cargo run --release -- "<FEN>"`
//! `cargo run --release -- "<FEN>" --depth 4 --seed 7 --board`
//!
//! Without a FEN the standard starting position is used. Set `RUST_LOG=debug`
//! to see per-depth search progress on stderr.

use pseudo_chess::engines::engine_iterative::IterativeEngine;
use pseudo_chess::engines::engine_trait::{Engine, GoParams};
use pseudo_chess::errors::ChessError;
use pseudo_chess::game_state::game_state::GameState;
use pseudo_chess::search::iterative_deepening::SearchConfig;
use pseudo_chess::utils::render_game_state::render_game_state;
use tracing_subscriber::EnvFilter;

const VALUE_FLAGS: [&str; 2] = ["--depth", "--seed"];

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .and_then(|pair| pair[1].parse::<T>().ok())
}

fn positional_fen(args: &[String]) -> Option<&str> {
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if !arg.starts_with("--") {
            return Some(arg);
        }
    }
    None
}

fn main() -> Result<(), ChessError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let game = match positional_fen(&args) {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };

    if args.iter().any(|a| a == "--board") {
        println!("{}", render_game_state(&game));
    }

    let mut engine = match parse_flag::<u64>(&args, "--seed") {
        Some(seed) => IterativeEngine::with_seed(SearchConfig::default(), seed),
        None => IterativeEngine::default(),
    };
    let params = GoParams {
        depth: parse_flag::<u8>(&args, "--depth").map(|depth| depth.max(1)),
    };

    let output = engine.choose_move(&game, &params)?;
    for line in &output.info_lines {
        println!("{line}");
    }

    match output.best_move {
        Some(mv) => println!("bestmove {}", mv.to_uci()?),
        None => println!("bestmove (none)"),
    }

    Ok(())
}
