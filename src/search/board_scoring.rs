//! Static position evaluation.
//!
//! Material plus a lightly-weighted piece-square term, summed over the
//! board from White's perspective. Tables are stored White-oriented with
//! `a1` first and mirrored vertically for Black; the king carries material
//! weight zero and no table. Terminal positions short-circuit to the
//! checkmate/stalemate scores.

use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;

pub type Score = i32;

/// Terminal score for the side that delivered mate.
pub const CHECKMATE_SCORE: Score = 10_000;
pub const STALEMATE_SCORE: Score = 0;

/// Window bounds strictly outside every reachable score.
pub const MIN_SCORE: Score = -100_000;
pub const MAX_SCORE: Score = 100_000;

/// Material values scaled by ten so the positional term stays integral at
/// a tenth of a pawn per table point.
#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 10,
        PieceKind::Knight => 30,
        PieceKind::Bishop => 30,
        PieceKind::Rook => 50,
        PieceKind::Queen => 90,
        PieceKind::King => 0,
    }
}

#[rustfmt::skip]
const KNIGHT_TABLE: [Score; 64] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 2, 2, 2, 2, 2, 2, 1,
    1, 2, 3, 3, 3, 3, 2, 1,
    1, 2, 3, 4, 4, 3, 2, 1,
    1, 2, 3, 4, 4, 3, 2, 1,
    1, 2, 3, 3, 3, 3, 2, 1,
    1, 2, 2, 2, 2, 2, 2, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

#[rustfmt::skip]
const BISHOP_TABLE: [Score; 64] = [
    4, 3, 2, 1, 1, 2, 3, 4,
    3, 4, 3, 2, 2, 3, 4, 3,
    2, 3, 4, 3, 3, 4, 3, 2,
    1, 2, 3, 4, 4, 3, 2, 1,
    1, 2, 3, 4, 4, 3, 2, 1,
    2, 3, 4, 3, 3, 4, 3, 2,
    3, 4, 3, 2, 2, 3, 4, 3,
    4, 3, 2, 1, 1, 2, 3, 4,
];

#[rustfmt::skip]
const ROOK_TABLE: [Score; 64] = [
    4, 3, 4, 4, 4, 4, 3, 4,
    4, 4, 4, 4, 4, 4, 4, 4,
    1, 1, 2, 2, 2, 2, 1, 1,
    1, 2, 3, 4, 4, 3, 2, 1,
    1, 2, 3, 4, 4, 3, 2, 1,
    1, 1, 2, 3, 3, 2, 1, 1,
    4, 4, 4, 4, 4, 4, 4, 4,
    4, 3, 4, 4, 4, 4, 3, 4,
];

#[rustfmt::skip]
const QUEEN_TABLE: [Score; 64] = [
    1, 1, 1, 3, 1, 1, 1, 1,
    1, 1, 2, 3, 3, 1, 1, 1,
    1, 4, 3, 3, 3, 4, 2, 1,
    1, 2, 3, 3, 3, 2, 2, 1,
    1, 2, 3, 3, 3, 2, 2, 1,
    1, 4, 3, 3, 3, 4, 2, 1,
    1, 2, 3, 3, 3, 1, 1, 1,
    1, 1, 1, 3, 1, 1, 1, 1,
];

#[rustfmt::skip]
const PAWN_TABLE: [Score; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 1, 0, 0, 1, 1, 1,
    1, 1, 2, 3, 3, 2, 1, 1,
    1, 2, 3, 4, 4, 3, 2, 1,
    2, 3, 3, 5, 5, 3, 3, 2,
    5, 6, 6, 7, 7, 6, 6, 5,
    8, 8, 8, 8, 8, 8, 8, 8,
    8, 8, 8, 8, 8, 8, 8, 8,
];

/// Positional table value for a piece standing on `square`. Black reads the
/// vertically mirrored entry.
#[inline]
pub fn piece_square_value(kind: PieceKind, color: Color, square: Square) -> Score {
    let index = match color {
        Color::White => square,
        Color::Black => square ^ 56,
    } as usize;

    match kind {
        PieceKind::Pawn => PAWN_TABLE[index],
        PieceKind::Knight => KNIGHT_TABLE[index],
        PieceKind::Bishop => BISHOP_TABLE[index],
        PieceKind::Rook => ROOK_TABLE[index],
        PieceKind::Queen => QUEEN_TABLE[index],
        PieceKind::King => 0,
    }
}

/// Score the position from White's perspective: positive favors White.
/// Relies on the terminal flags maintained by the legal move generator.
pub fn evaluate(state: &GameState) -> Score {
    if state.checkmate {
        return match state.side_to_move {
            Color::White => -CHECKMATE_SCORE,
            Color::Black => CHECKMATE_SCORE,
        };
    }
    if state.stalemate {
        return STALEMATE_SCORE;
    }

    let mut score = 0;
    for square in 0..64u8 {
        let Some(piece) = state.piece_at(square) else {
            continue;
        };
        let value = piece_value(piece.kind) + piece_square_value(piece.kind, piece.color, square);
        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }
    score
}
