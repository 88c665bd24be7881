//! Minimal head-to-head engine match harness for local testing.
//!
//! Plays two `Engine` implementations against each other from the standard
//! starting position, with an optional seeded random opening prefix so
//! repeated runs explore different games reproducibly. The state model
//! carries no halfmove clock or repetition history, so draws are
//! adjudicated by checkmate, stalemate, or the ply limit alone.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl MatchOutcome {
    /// PGN result string for the outcome.
    pub fn result_str(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => "1-0",
            MatchOutcome::BlackWinCheckmate => "0-1",
            MatchOutcome::DrawStalemate | MatchOutcome::DrawMaxPlies => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Random moves played before the engines take over.
    pub opening_plies: u8,
    pub seed: u64,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_plies: 4,
            seed: 1,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    /// Derived notation of every move played, opening prefix included.
    pub moves_played: Vec<String>,
    pub final_state: GameState,
}

/// Play one game, `white` moving first. Engine moves are validated through
/// the checked apply path before they touch the board.
pub fn play_match<'a>(
    white: &'a mut dyn Engine,
    black: &'a mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let mut game = GameState::new_game();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut moves_played = Vec::new();

    white.new_game();
    black.new_game();

    loop {
        let legal_moves = generate_legal_moves(&mut game);
        if legal_moves.is_empty() {
            let outcome = if game.checkmate {
                match game.side_to_move {
                    Color::White => MatchOutcome::BlackWinCheckmate,
                    Color::Black => MatchOutcome::WhiteWinCheckmate,
                }
            } else {
                MatchOutcome::DrawStalemate
            };
            return Ok(MatchResult {
                outcome,
                moves_played,
                final_state: game,
            });
        }

        if moves_played.len() >= config.max_plies as usize {
            return Ok(MatchResult {
                outcome: MatchOutcome::DrawMaxPlies,
                moves_played,
                final_state: game,
            });
        }

        let mv = if (moves_played.len() as u8) < config.opening_plies {
            *legal_moves
                .as_slice()
                .choose(&mut rng)
                .ok_or("opening move selection failed")?
        } else {
            let engine = match game.side_to_move {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            engine
                .choose_move(&game, &config.go_params)?
                .best_move
                .ok_or_else(|| ChessError::NoLegalMoves.to_string())?
        };

        moves_played.push(mv.notation());
        apply_move(&mut game, &mv).map_err(|e| e.to_string())?;
    }
}
