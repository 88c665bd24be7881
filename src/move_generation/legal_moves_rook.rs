//! Rook move generation over the four orthogonal rays.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::move_descriptions::ChessMove;

pub const ROOK_DIRECTIONS: [Direction; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn generate_rook_moves(
    state: &GameState,
    from: Square,
    rook: Piece,
    moves: &mut Vec<ChessMove>,
) {
    generate_slider_moves(state, from, rook, &ROOK_DIRECTIONS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn pinned_rook_slides_along_the_pin_file_only() {
        let mut game = GameState::from_fen("k3r3/8/8/8/8/4R3/8/4K3 w - - 0 1")
            .expect("position should parse");
        let from = algebraic_to_square("e3").expect("square should parse");
        let rook_moves: Vec<_> = generate_legal_moves(&mut game)
            .into_iter()
            .filter(|m| m.from == from)
            .collect();

        // e2, e4..e7 and the capture on e8; nothing leaves the e-file.
        assert_eq!(rook_moves.len(), 6);
        assert!(rook_moves.iter().all(|m| file_of(m.to) == 4));
        assert!(rook_moves
            .iter()
            .any(|m| m.to == algebraic_to_square("e8").expect("square") && m.is_capture()));
    }
}
