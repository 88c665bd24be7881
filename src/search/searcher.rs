//! Search entry point: algorithm selection and the root contract.
//!
//! All four variants are depth-bounded and select the same best move for
//! the same position, depth and move order; they differ only in nodes
//! visited. Callers wanting variety shuffle the move list before calling —
//! the search itself is deterministic and keeps the first best-scoring
//! move.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::Score;
use crate::search::minimax::{minimax_alpha_beta_best_move, minimax_best_move};
use crate::search::negamax::{
    negamax_alpha_beta_best_move, negamax_best_move, side_multiplier,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Minimax,
    MinimaxAlphaBeta,
    Negamax,
    NegamaxAlphaBeta,
}

impl Default for SearchAlgorithm {
    fn default() -> Self {
        SearchAlgorithm::NegamaxAlphaBeta
    }
}

/// Root search result. The score is normalized to White's perspective
/// regardless of the algorithm family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: ChessMove,
    pub score: Score,
    pub nodes: u64,
    pub depth: u8,
}

/// Recommend a move from `moves`, or `None` when the list is empty (the
/// caller should treat that as checkmate or stalemate, not retry). Depth is
/// clamped to at least one ply.
pub fn find_best_move(
    state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    algorithm: SearchAlgorithm,
) -> Option<SearchReport> {
    if moves.is_empty() {
        return None;
    }
    let depth = depth.max(1);
    let mut nodes = 0u64;

    let (best_move, raw_score) = match algorithm {
        SearchAlgorithm::Minimax => minimax_best_move(state, moves, depth, &mut nodes),
        SearchAlgorithm::MinimaxAlphaBeta => {
            minimax_alpha_beta_best_move(state, moves, depth, &mut nodes)
        }
        SearchAlgorithm::Negamax => negamax_best_move(state, moves, depth, &mut nodes),
        SearchAlgorithm::NegamaxAlphaBeta => {
            negamax_alpha_beta_best_move(state, moves, depth, &mut nodes)
        }
    };

    let best_move = best_move?;
    let score = match algorithm {
        SearchAlgorithm::Minimax | SearchAlgorithm::MinimaxAlphaBeta => raw_score,
        SearchAlgorithm::Negamax | SearchAlgorithm::NegamaxAlphaBeta => {
            side_multiplier(state.side_to_move) * raw_score
        }
    };

    Some(SearchReport {
        best_move,
        score,
        nodes,
        depth,
    })
}

pub const ALL_ALGORITHMS: [SearchAlgorithm; 4] = [
    SearchAlgorithm::Minimax,
    SearchAlgorithm::MinimaxAlphaBeta,
    SearchAlgorithm::Negamax,
    SearchAlgorithm::NegamaxAlphaBeta,
];
