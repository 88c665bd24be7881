//! Move value type and its derived display notation.
//!
//! A `ChessMove` records everything needed to play and later reverse one
//! ply: origin, destination, the piece moved, the piece captured (for en
//! passant the victim pawn, which does not sit on the destination square),
//! and the special-move flags. Equality is defined by `(from, to)` alone;
//! the flags are derived data, not identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{file_of, rank_of, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
}

impl ChessMove {
    /// Ordinary move or capture. The promotion flag is derived from the
    /// moved piece and destination rank.
    pub fn new(from: Square, to: Square, moved: Piece, captured: Option<Piece>) -> Self {
        let is_promotion =
            moved.kind == PieceKind::Pawn && rank_of(to) == moved.color.promotion_rank();
        Self {
            from,
            to,
            moved,
            captured,
            is_en_passant: false,
            is_castle: false,
            is_promotion,
        }
    }

    /// En passant capture; the victim is the enemy pawn on the origin rank.
    pub fn en_passant(from: Square, to: Square, moved: Piece) -> Self {
        Self {
            from,
            to,
            moved,
            captured: Some(Piece::new(moved.color.opposite(), PieceKind::Pawn)),
            is_en_passant: true,
            is_castle: false,
            is_promotion: false,
        }
    }

    /// King two-square castling move; the rook relocation is derived from
    /// the destination file when the move is applied.
    pub fn castle(from: Square, to: Square, moved: Piece) -> Self {
        Self {
            from,
            to,
            moved,
            captured: None,
            is_en_passant: false,
            is_castle: true,
            is_promotion: false,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castle && file_of(self.to) > file_of(self.from)
    }

    /// Square the captured pawn actually occupies for an en passant move
    /// (destination file, origin rank).
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        rank_of(self.from) * 8 + file_of(self.to)
    }

    /// Display notation: `O-O`/`O-O-O` for castling, destination file+rank
    /// for quiet pawn moves, origin file + `x` for pawn captures, and a
    /// piece-letter prefix (with `x` infix on captures) for everything
    /// else. Display only; never consulted for equality or legality.
    pub fn notation(&self) -> String {
        if self.is_castle {
            return if self.is_kingside_castle() {
                "O-O".to_owned()
            } else {
                "O-O-O".to_owned()
            };
        }

        let destination = format!(
            "{}{}",
            char::from(b'a' + file_of(self.to)),
            char::from(b'1' + rank_of(self.to))
        );

        if self.moved.kind == PieceKind::Pawn {
            if self.is_capture() {
                return format!("{}x{}", char::from(b'a' + file_of(self.from)), destination);
            }
            return destination;
        }

        if self.is_capture() {
            format!("{}x{}", self.moved.kind.letter(), destination)
        } else {
            format!("{}{}", self.moved.kind.letter(), destination)
        }
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{square_at, Color, Piece, PieceKind};

    fn white(kind: PieceKind) -> Piece {
        Piece::new(Color::White, kind)
    }

    #[test]
    fn equality_ignores_derived_flags() {
        let quiet = ChessMove::new(square_at(4, 1), square_at(4, 3), white(PieceKind::Pawn), None);
        let mut flagged = quiet;
        flagged.is_promotion = true;
        assert_eq!(quiet, flagged);
    }

    #[test]
    fn pawn_move_notation() {
        let push = ChessMove::new(square_at(4, 1), square_at(4, 3), white(PieceKind::Pawn), None);
        assert_eq!(push.notation(), "e4");

        let capture = ChessMove::new(
            square_at(4, 3),
            square_at(3, 4),
            white(PieceKind::Pawn),
            Some(Piece::new(Color::Black, PieceKind::Pawn)),
        );
        assert_eq!(capture.notation(), "exd5");
    }

    #[test]
    fn piece_move_notation() {
        let knight = ChessMove::new(square_at(6, 0), square_at(5, 2), white(PieceKind::Knight), None);
        assert_eq!(knight.notation(), "Nf3");

        let rook_capture = ChessMove::new(
            square_at(0, 0),
            square_at(0, 7),
            white(PieceKind::Rook),
            Some(Piece::new(Color::Black, PieceKind::Rook)),
        );
        assert_eq!(rook_capture.notation(), "Rxa8");
    }

    #[test]
    fn castle_notation_distinguishes_sides() {
        let kingside = ChessMove::castle(square_at(4, 0), square_at(6, 0), white(PieceKind::King));
        let queenside = ChessMove::castle(square_at(4, 0), square_at(2, 0), white(PieceKind::King));
        assert_eq!(kingside.notation(), "O-O");
        assert_eq!(queenside.notation(), "O-O-O");
    }

    #[test]
    fn promotion_flag_derived_from_destination_rank() {
        let promo = ChessMove::new(square_at(0, 6), square_at(0, 7), white(PieceKind::Pawn), None);
        assert!(promo.is_promotion);
        let push = ChessMove::new(square_at(0, 5), square_at(0, 6), white(PieceKind::Pawn), None);
        assert!(!push.is_promotion);
    }

    #[test]
    fn en_passant_victim_square_is_on_origin_rank() {
        let ep = ChessMove::en_passant(square_at(4, 4), square_at(3, 5), white(PieceKind::Pawn));
        assert_eq!(ep.en_passant_victim_square(), square_at(3, 4));
        assert_eq!(
            ep.captured,
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }
}
