//! Minimax search, plain and alpha-beta pruned.
//!
//! Scores are always from White's perspective: White maximizes, Black
//! minimizes. Results are threaded through return values; the only state
//! shared across the recursion is the position itself, mutated under
//! strict make/unmake discipline (every apply is undone on every exit
//! path, including pruning cutoffs).

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move_unchecked, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{evaluate, Score, MAX_SCORE, MIN_SCORE};

/// Root search without pruning. Ties keep the first best-scoring move in
/// `moves` order.
pub fn minimax_best_move(
    state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    nodes: &mut u64,
) -> (Option<ChessMove>, Score) {
    let maximizing = state.side_to_move == Color::White;
    let mut best_move = None;
    let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };

    for mv in moves {
        apply_move_unchecked(state, mv);
        let score = minimax_score(state, depth - 1, nodes);
        undo_move(state);

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            best_move = Some(*mv);
        }
    }

    (best_move, best_score)
}

/// Root search with alpha-beta pruning. Selects the same move as
/// [`minimax_best_move`] for identical move order; pruning only reduces the
/// nodes visited.
pub fn minimax_alpha_beta_best_move(
    state: &mut GameState,
    moves: &[ChessMove],
    depth: u8,
    nodes: &mut u64,
) -> (Option<ChessMove>, Score) {
    let maximizing = state.side_to_move == Color::White;
    let mut best_move = None;
    let mut best_score = if maximizing { MIN_SCORE } else { MAX_SCORE };
    let mut alpha = MIN_SCORE;
    let mut beta = MAX_SCORE;

    for mv in moves {
        apply_move_unchecked(state, mv);
        let score = minimax_alpha_beta_score(state, depth - 1, alpha, beta, nodes);
        undo_move(state);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            beta = beta.min(best_score);
        }
    }

    (best_move, best_score)
}

fn minimax_score(state: &mut GameState, depth: u8, nodes: &mut u64) -> Score {
    *nodes += 1;
    let moves = generate_legal_moves(state);
    // The generate call refreshed the terminal flags, so a bare evaluate
    // covers checkmate, stalemate and the depth horizon alike.
    if moves.is_empty() || depth == 0 {
        return evaluate(state);
    }

    if state.side_to_move == Color::White {
        let mut value = MIN_SCORE;
        for mv in &moves {
            apply_move_unchecked(state, mv);
            value = value.max(minimax_score(state, depth - 1, nodes));
            undo_move(state);
        }
        value
    } else {
        let mut value = MAX_SCORE;
        for mv in &moves {
            apply_move_unchecked(state, mv);
            value = value.min(minimax_score(state, depth - 1, nodes));
            undo_move(state);
        }
        value
    }
}

fn minimax_alpha_beta_score(
    state: &mut GameState,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;
    let moves = generate_legal_moves(state);
    if moves.is_empty() || depth == 0 {
        return evaluate(state);
    }

    if state.side_to_move == Color::White {
        let mut value = MIN_SCORE;
        for mv in &moves {
            apply_move_unchecked(state, mv);
            value = value.max(minimax_alpha_beta_score(state, depth - 1, alpha, beta, nodes));
            undo_move(state);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = MAX_SCORE;
        for mv in &moves {
            apply_move_unchecked(state, mv);
            value = value.min(minimax_alpha_beta_score(state, depth - 1, alpha, beta, nodes));
            undo_move(state);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        value
    }
}
