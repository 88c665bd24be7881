//! Bishop move generation over the four diagonal rays.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::moves::move_descriptions::ChessMove;

pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn generate_bishop_moves(
    state: &GameState,
    from: Square,
    bishop: Piece,
    moves: &mut Vec<ChessMove>,
) {
    generate_slider_moves(state, from, bishop, &BISHOP_DIRECTIONS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn central_bishop_sweeps_both_diagonals() {
        let mut game = GameState::from_fen("k7/8/8/8/3B4/8/8/4K3 w - - 0 1")
            .expect("position should parse");
        let from = algebraic_to_square("d4").expect("square should parse");
        let bishop_moves: Vec<_> = generate_legal_moves(&mut game)
            .into_iter()
            .filter(|m| m.from == from)
            .collect();
        assert_eq!(bishop_moves.len(), 13);
    }
}
