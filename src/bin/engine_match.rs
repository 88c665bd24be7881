//! Headless engine-versus-engine match runner.
//!
//! Plays a short seeded match between the searching engine and the greedy
//! engine, printing the final board, the move list and a PGN record.

use quince_chess::engines::engine_greedy::GreedyEngine;
use quince_chess::engines::engine_minimax::MinimaxEngine;
use quince_chess::engines::engine_trait::Engine;
use quince_chess::utils::engine_match_harness::{play_match, MatchConfig};
use quince_chess::utils::pgn::write_pgn;
use quince_chess::utils::render_game_state::render_ascii;

fn main() {
    if let Err(message) = run() {
        eprintln!("engine match failed: {message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut white = MinimaxEngine::new(3);
    let mut black = GreedyEngine::new();
    let config = MatchConfig {
        max_plies: 120,
        seed: 7,
        ..MatchConfig::default()
    };

    println!("{} vs {}", white.name(), black.name());

    let result = play_match(&mut white, &mut black, &config)?;

    println!("{}", render_ascii(&result.final_state));
    println!(
        "outcome: {:?} after {} plies",
        result.outcome,
        result.moves_played.len()
    );
    println!();
    println!(
        "{}",
        write_pgn(
            &result.final_state,
            white.name(),
            black.name(),
            result.outcome.result_str(),
        )
    );

    Ok(())
}
