//! Per-ply undo record.

use crate::game_state::chess_types::{CastlingRights, Square};
use crate::moves::move_descriptions::ChessMove;

/// Everything required to reverse exactly one applied move: the move itself
/// plus the two state fields that cannot be reconstructed from it.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: ChessMove,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
}
