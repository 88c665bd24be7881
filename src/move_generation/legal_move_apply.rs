//! Move application and its exact inverse.
//!
//! `apply_move` validates against the current legal move set before
//! touching the board; `apply_move_unchecked` is the trusted path used by
//! search and perft on generator-produced moves. Every apply pushes one
//! undo record; `undo_move` pops it and restores board, king square,
//! castling rights, en-passant target and side to move exactly.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_ROOK_HOME, BLACK_QUEENSIDE_ROOK_HOME, WHITE_KINGSIDE_ROOK_HOME,
    WHITE_QUEENSIDE_ROOK_HOME,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;

/// Validate `mv` against the legal move set, then apply the canonical
/// generated instance (the caller's flags are untrusted; equality is by
/// from/to). Rejects without mutating on an illegal move.
pub fn apply_move(state: &mut GameState, mv: &ChessMove) -> ChessResult<()> {
    let legal_moves = generate_legal_moves(state);
    match legal_moves.iter().find(|candidate| *candidate == mv) {
        Some(canonical) => {
            let canonical = *canonical;
            apply_move_unchecked(state, &canonical);
            Ok(())
        }
        None => Err(ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        }),
    }
}

/// Play a generator-produced move without re-validation.
pub fn apply_move_unchecked(state: &mut GameState, mv: &ChessMove) {
    state.undo_stack.push(UndoState {
        mv: *mv,
        castling_rights: state.castling_rights,
        en_passant_square: state.en_passant_square,
    });

    let mover = mv.moved.color;

    state.board[mv.from as usize] = None;
    state.board[mv.to as usize] = Some(mv.moved);

    if mv.moved.kind == PieceKind::King {
        state.king_squares[mover.index()] = mv.to;
    }

    if mv.is_promotion {
        // Always the strongest piece; there is no promotion choice.
        state.board[mv.to as usize] = Some(Piece::new(mover, PieceKind::Queen));
    }

    if mv.is_en_passant {
        state.board[mv.en_passant_victim_square() as usize] = None;
    }

    // A two-square pawn advance opens an en-passant window for one ply.
    if mv.moved.kind == PieceKind::Pawn && rank_of(mv.from).abs_diff(rank_of(mv.to)) == 2 {
        let mid_rank = (rank_of(mv.from) + rank_of(mv.to)) / 2;
        state.en_passant_square = Some(square_at(file_of(mv.from), mid_rank));
    } else {
        state.en_passant_square = None;
    }

    if mv.is_castle {
        let (rook_from, rook_to) = if mv.is_kingside_castle() {
            (mv.from + 3, mv.from + 1)
        } else {
            (mv.from - 4, mv.from - 1)
        };
        state.board[rook_to as usize] = state.board[rook_from as usize].take();
    }

    update_castling_rights(state, mv);

    state.side_to_move = state.side_to_move.opposite();
}

/// Reverse the most recent applied move. A no-op returning `None` when the
/// history is empty. Terminal flags are cleared: a position that was mate
/// or stalemate before the undo is not after it.
pub fn undo_move(state: &mut GameState) -> Option<ChessMove> {
    let undo = state.undo_stack.pop()?;
    let mv = undo.mv;
    let mover = mv.moved.color;

    state.board[mv.from as usize] = Some(mv.moved);
    state.board[mv.to as usize] = if mv.is_en_passant { None } else { mv.captured };

    if mv.is_en_passant {
        state.board[mv.en_passant_victim_square() as usize] = mv.captured;
    }

    if mv.moved.kind == PieceKind::King {
        state.king_squares[mover.index()] = mv.from;
    }

    if mv.is_castle {
        let (rook_from, rook_to) = if mv.is_kingside_castle() {
            (mv.from + 3, mv.from + 1)
        } else {
            (mv.from - 4, mv.from - 1)
        };
        state.board[rook_from as usize] = state.board[rook_to as usize].take();
    }

    state.castling_rights = undo.castling_rights;
    state.en_passant_square = undo.en_passant_square;
    state.side_to_move = state.side_to_move.opposite();

    state.checkmate = false;
    state.stalemate = false;

    Some(mv)
}

/// Rights are cleared by king moves, rook moves off a home square, and
/// captures of a rook on its home square; they are never re-granted.
fn update_castling_rights(state: &mut GameState, mv: &ChessMove) {
    match (mv.moved.color, mv.moved.kind) {
        (Color::White, PieceKind::King) => {
            state.castling_rights &= !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
        }
        (Color::Black, PieceKind::King) => {
            state.castling_rights &= !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        }
        (Color::White, PieceKind::Rook) => match mv.from {
            WHITE_QUEENSIDE_ROOK_HOME => state.castling_rights &= !CASTLE_WHITE_QUEENSIDE,
            WHITE_KINGSIDE_ROOK_HOME => state.castling_rights &= !CASTLE_WHITE_KINGSIDE,
            _ => {}
        },
        (Color::Black, PieceKind::Rook) => match mv.from {
            BLACK_QUEENSIDE_ROOK_HOME => state.castling_rights &= !CASTLE_BLACK_QUEENSIDE,
            BLACK_KINGSIDE_ROOK_HOME => state.castling_rights &= !CASTLE_BLACK_KINGSIDE,
            _ => {}
        },
        _ => {}
    }

    if let Some(captured) = mv.captured {
        if captured.kind == PieceKind::Rook {
            match (captured.color, mv.to) {
                (Color::White, WHITE_QUEENSIDE_ROOK_HOME) => {
                    state.castling_rights &= !CASTLE_WHITE_QUEENSIDE;
                }
                (Color::White, WHITE_KINGSIDE_ROOK_HOME) => {
                    state.castling_rights &= !CASTLE_WHITE_KINGSIDE;
                }
                (Color::Black, BLACK_QUEENSIDE_ROOK_HOME) => {
                    state.castling_rights &= !CASTLE_BLACK_QUEENSIDE;
                }
                (Color::Black, BLACK_KINGSIDE_ROOK_HOME) => {
                    state.castling_rights &= !CASTLE_BLACK_KINGSIDE;
                }
                _ => {}
            }
        }
    }
}
