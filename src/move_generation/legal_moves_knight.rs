//! Knight move generation. A pinned knight can never move: no knight step
//! stays on a pin axis.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::KNIGHT_OFFSETS;
use crate::move_generation::legal_move_shared::pin_direction_for;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(
    state: &GameState,
    from: Square,
    knight: Piece,
    moves: &mut Vec<ChessMove>,
) {
    if pin_direction_for(&state.pins, from).is_some() {
        return;
    }

    for &offset in &KNIGHT_OFFSETS {
        let Some(target) = offset_square(from, offset, 1) else {
            continue;
        };
        match state.piece_at(target) {
            None => moves.push(ChessMove::new(from, target, knight, None)),
            Some(occupant) => {
                if occupant.color != knight.color {
                    moves.push(ChessMove::new(from, target, knight, Some(occupant)));
                }
            }
        }
    }
}
