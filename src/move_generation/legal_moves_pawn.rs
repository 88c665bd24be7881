//! Pawn move generation: advances, captures, promotion flagging, and en
//! passant with its horizontal discovered-check scan.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::{pin_allows, pin_direction_for};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_pawn_moves(
    state: &GameState,
    from: Square,
    pawn: Piece,
    moves: &mut Vec<ChessMove>,
) {
    let pin = pin_direction_for(&state.pins, from);
    let forward = pawn.color.forward();

    // Single and double advances onto empty squares only.
    if let Some(one_up) = offset_square(from, (0, forward), 1) {
        if state.piece_at(one_up).is_none() && pin_allows(pin, (0, forward)) {
            moves.push(ChessMove::new(from, one_up, pawn, None));

            if rank_of(from) == pawn.color.pawn_start_rank() {
                if let Some(two_up) = offset_square(from, (0, forward), 2) {
                    if state.piece_at(two_up).is_none() {
                        moves.push(ChessMove::new(from, two_up, pawn, None));
                    }
                }
            }
        }
    }

    // Diagonal captures, including the en passant target square.
    for file_delta in [-1i8, 1] {
        let direction = (file_delta, forward);
        let Some(target) = offset_square(from, direction, 1) else {
            continue;
        };
        if !pin_allows(pin, direction) {
            continue;
        }

        if let Some(occupant) = state.piece_at(target) {
            if occupant.color != pawn.color {
                moves.push(ChessMove::new(from, target, pawn, Some(occupant)));
            }
        } else if state.en_passant_square == Some(target)
            && !en_passant_exposes_king(state, from, target, pawn.color)
        {
            moves.push(ChessMove::en_passant(from, target, pawn));
        }
    }
}

/// Horizontal discovered-check scan for en passant.
///
/// Both the capturing pawn and the victim leave the origin rank at once, a
/// case ordinary pin detection cannot see. With the king on that rank, walk
/// from it toward and past the pawn pair: if the first remaining occupied
/// square holds an enemy rook or queen, the capture would expose the king.
fn en_passant_exposes_king(state: &GameState, from: Square, target: Square, side: Color) -> bool {
    let king_sq = state.king_square(side);
    let rank = rank_of(from);
    if rank_of(king_sq) != rank {
        return false;
    }

    let capturing_file = file_of(from);
    let victim_file = file_of(target);
    let king_file = file_of(king_sq);
    let step: i8 = if king_file < capturing_file { 1 } else { -1 };
    let enemy = side.opposite();

    let mut file = king_file as i8 + step;
    while (0..8).contains(&file) {
        let f = file as u8;
        if f != capturing_file && f != victim_file {
            if let Some(piece) = state.piece_at(square_at(f, rank)) {
                return piece.color == enemy
                    && (piece.kind == PieceKind::Rook || piece.kind == PieceKind::Queen);
            }
        }
        file += step;
    }

    false
}
