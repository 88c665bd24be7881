//! Negamax search, plain and alpha-beta pruned.
//!
//! The minimax reformulation: every node maximizes the negation of the
//! child score, so values are oriented toward the side to move at that
//! node. Selects the same move as the minimax variants at equal depth and
//! move order.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move_unchecked, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{evaluate, Score, MAX_SCORE, MIN_SCORE};

/// +1 when White is to move, -1 for Black; converts the White-perspective
/// evaluation into a side-to-move score.
#[inline]
pub const fn side_multiplier(color: Color) -> Score {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Root negamax without pruning. The returned score is oriented toward the
/// side to move at the root.
pub fn negamax_best_move(
    state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    nodes: &mut u64,
) -> (Option<ChessMove>, Score) {
    let mut best_move = None;
    let mut best_score = MIN_SCORE;

    for mv in moves {
        apply_move_unchecked(state, mv);
        let score = -negamax_score(state, depth - 1, nodes);
        undo_move(state);

        if score > best_score {
            best_score = score;
            best_move = Some(*mv);
        }
    }

    (best_move, best_score)
}

/// Root negamax with alpha-beta pruning over a `[alpha, beta]` window that
/// is negated and swapped at every ply.
pub fn negamax_alpha_beta_best_move(
    state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    nodes: &mut u64,
) -> (Option<ChessMove>, Score) {
    let mut best_move = None;
    let mut best_score = MIN_SCORE;
    let mut alpha = MIN_SCORE;
    let beta = MAX_SCORE;

    for mv in moves {
        apply_move_unchecked(state, mv);
        let score = -negamax_alpha_beta_score(state, depth - 1, -beta, -alpha, nodes);
        undo_move(state);

        if score > best_score {
            best_score = score;
            best_move = Some(*mv);
        }
        alpha = alpha.max(best_score);
    }

    (best_move, best_score)
}

fn negamax_score(state: &mut GameState, depth: u8, nodes: &mut u64) -> Score {
    *nodes += 1;
    let moves = generate_legal_moves(state);
    if moves.is_empty() || depth == 0 {
        return side_multiplier(state.side_to_move) * evaluate(state);
    }

    let mut value = MIN_SCORE;
    for mv in &moves {
        apply_move_unchecked(state, mv);
        value = value.max(-negamax_score(state, depth - 1, nodes));
        undo_move(state);
    }
    value
}

fn negamax_alpha_beta_score(
    state: &mut GameState,
    depth: u8,
    mut alpha: Score,
    beta: Score,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;
    let moves = generate_legal_moves(state);
    if moves.is_empty() || depth == 0 {
        return side_multiplier(state.side_to_move) * evaluate(state);
    }

    let mut value = MIN_SCORE;
    for mv in &moves {
        apply_move_unchecked(state, mv);
        value = value.max(-negamax_alpha_beta_score(state, depth - 1, -beta, -alpha, nodes));
        undo_move(state);
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }
    value
}
