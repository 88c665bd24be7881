//! Depth-bounded searching engine.
//!
//! Wraps the root search behind the `Engine` trait. The root move list is
//! shuffled by default so equal-scoring recommendations vary between games
//! (tie-breaking inside the search itself is deterministic: first best
//! move wins).

use rand::seq::SliceRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::search::searcher::{find_best_move, SearchAlgorithm};

pub struct MinimaxEngine {
    depth: u8,
    algorithm: SearchAlgorithm,
    shuffle_root: bool,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            algorithm: SearchAlgorithm::default(),
            shuffle_root: true,
        }
    }

    pub fn with_algorithm(depth: u8, algorithm: SearchAlgorithm) -> Self {
        Self {
            depth,
            algorithm,
            shuffle_root: true,
        }
    }

    /// Deterministic root order; used where reproducibility matters more
    /// than variety.
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle_root = false;
        self
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Quince Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut scratch = game_state.clone();
        let mut legal_moves = generate_legal_moves(&mut scratch);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        if self.shuffle_root {
            let mut rng = rand::rng();
            legal_moves.shuffle(&mut rng);
        }

        let depth = params.depth.unwrap_or(self.depth);
        let report = find_best_move(&mut scratch, &legal_moves, depth, self.algorithm)
            .ok_or("search returned no move for a non-empty move list")?;

        out.info_lines.push(format!(
            "info string minimax_engine depth {} nodes {} score {}",
            report.depth, report.nodes, report.score
        ));
        out.best_move = Some(report.best_move);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn finds_the_obvious_capture() {
        let game = GameState::from_fen("k7/8/8/3q4/4P3/8/8/K7 w - - 0 1")
            .expect("position should parse");
        let mut engine = MinimaxEngine::new(2);
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should succeed");
        let mv = out.best_move.expect("a move should be recommended");
        assert_eq!(mv.to, algebraic_to_square("d5").expect("square should parse"));
    }

    #[test]
    fn depth_override_from_params_is_honored() {
        let game = GameState::new_game();
        let mut engine = MinimaxEngine::new(3).without_shuffle();
        let out = engine
            .choose_move(
                &game,
                &GoParams { depth: Some(1) },
            )
            .expect("engine should succeed");
        assert!(out
            .info_lines
            .iter()
            .any(|line| line.contains("depth 1")));
    }

    #[test]
    fn terminal_positions_yield_no_move() {
        let mate = GameState::from_fen("8/8/8/8/8/5k2/6q1/6K1 w - - 0 1")
            .expect("position should parse");
        let mut engine = MinimaxEngine::new(2);
        let out = engine
            .choose_move(&mate, &GoParams::default())
            .expect("engine should succeed");
        assert_eq!(out.best_move, None);
    }

    #[test]
    fn leaves_the_caller_state_untouched() {
        let game = GameState::new_game();
        let fen_before = game.get_fen();
        let mut engine = MinimaxEngine::new(2);
        engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should succeed");
        assert_eq!(game.get_fen(), fen_before);
    }
}
