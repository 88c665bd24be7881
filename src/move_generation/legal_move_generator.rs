//! Full legal move generation pipeline.
//!
//! Refreshes check/pin state, generates pin-constrained pseudo-legal moves
//! piece by piece in ascending square order (deterministic for
//! reproducibility), then applies the check-resolution filter: under a
//! single check every non-king move must capture the checker or interpose
//! on the king-checker line; under double check only king moves survive.
//! An empty result marks the position checkmate or stalemate.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::find_pins_and_checks;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_legal_moves(state: &mut GameState) -> Vec<ChessMove> {
    let (in_check, pins, checks) = find_pins_and_checks(state);
    state.in_check = in_check;
    state.pins = pins;
    state.checks = checks;

    let mut moves = Vec::with_capacity(48);
    let side = state.side_to_move;

    if state.in_check && state.checks.len() >= 2 {
        // Double check: only the king can resolve it.
        let king_sq = state.king_square(side);
        let king = Piece::new(side, PieceKind::King);
        generate_king_moves(state, king_sq, king, &mut moves);
    } else {
        generate_pseudo_legal_moves(state, side, &mut moves);
        if state.in_check {
            filter_single_check_resolutions(state, &mut moves);
        }
    }

    if moves.is_empty() {
        state.checkmate = state.in_check;
        state.stalemate = !state.in_check;
    } else {
        state.checkmate = false;
        state.stalemate = false;
    }

    moves
}

fn generate_pseudo_legal_moves(state: &GameState, side: Color, moves: &mut Vec<ChessMove>) {
    for square in 0..64u8 {
        let Some(piece) = state.piece_at(square) else {
            continue;
        };
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(state, square, piece, moves),
            PieceKind::Knight => generate_knight_moves(state, square, piece, moves),
            PieceKind::Bishop => generate_bishop_moves(state, square, piece, moves),
            PieceKind::Rook => generate_rook_moves(state, square, piece, moves),
            PieceKind::Queen => generate_queen_moves(state, square, piece, moves),
            PieceKind::King => {
                generate_king_moves(state, square, piece, moves);
                generate_castle_moves(state, square, piece, moves);
            }
        }
    }
}

/// Under a single check, keep king moves plus non-king moves that capture
/// the checking piece or land between it and the king. An en passant
/// capture whose victim is the checking pawn also resolves the check even
/// though its destination is not the checker's square.
fn filter_single_check_resolutions(state: &GameState, moves: &mut Vec<ChessMove>) {
    let check = state.checks[0];
    let resolution_squares = squares_resolving_check(state, check);

    moves.retain(|mv| {
        if mv.moved.kind == PieceKind::King {
            return true;
        }
        if mv.is_en_passant && mv.en_passant_victim_square() == check.attacker {
            return true;
        }
        resolution_squares.contains(&mv.to)
    });
}

/// The checker's square plus, for sliding checkers, every square between
/// king and checker along the check direction. Knight checks cannot be
/// blocked.
fn squares_resolving_check(state: &GameState, check: CheckThreat) -> Vec<Square> {
    let attacker_kind = state
        .piece_at(check.attacker)
        .map(|piece| piece.kind);
    if attacker_kind == Some(PieceKind::Knight) {
        return vec![check.attacker];
    }

    let king_sq = state.king_square(state.side_to_move);
    let mut squares = Vec::with_capacity(7);
    for step in 1..8 {
        let Some(target) = offset_square(king_sq, check.direction, step) else {
            break;
        };
        squares.push(target);
        if target == check.attacker {
            break;
        }
    }
    squares
}
