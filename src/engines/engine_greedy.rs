//! One-ply greedy engine: grabs the most valuable capture available,
//! breaking ties uniformly at random. No lookahead.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::board_scoring::piece_value;

pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Quince Greedy"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut scratch = game_state.clone();
        let legal_moves = generate_legal_moves(&mut scratch);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();

        for mv in &legal_moves {
            let capture_value = mv
                .captured
                .map(|piece| piece_value(piece.kind))
                .unwrap_or(0);

            if capture_value > best_value {
                best_value = capture_value;
                best_moves.clear();
                best_moves.push(*mv);
            } else if capture_value == best_value {
                best_moves.push(*mv);
            }
        }

        let mut rng = rand::rng();
        let picked = best_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose greedy best move")?;

        out.info_lines.push(format!(
            "info string greedy_engine capture_score {}",
            best_value
        ));
        out.best_move = Some(*picked);
        Ok(out)
    }
}
