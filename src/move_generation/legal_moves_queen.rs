//! Queen move generation: the union of rook and bishop rays.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_slider_moves;
use crate::move_generation::legal_moves_bishop::BISHOP_DIRECTIONS;
use crate::move_generation::legal_moves_rook::ROOK_DIRECTIONS;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_queen_moves(
    state: &GameState,
    from: Square,
    queen: Piece,
    moves: &mut Vec<ChessMove>,
) {
    generate_slider_moves(state, from, queen, &ROOK_DIRECTIONS, moves);
    generate_slider_moves(state, from, queen, &BISHOP_DIRECTIONS, moves);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn central_queen_covers_both_ray_families() {
        let mut game = GameState::from_fen("k7/8/8/8/3Q4/8/8/4K3 w - - 0 1")
            .expect("position should parse");
        let from = algebraic_to_square("d4").expect("square should parse");
        let queen_moves: Vec<_> = generate_legal_moves(&mut game)
            .into_iter()
            .filter(|m| m.from == from)
            .collect();
        assert_eq!(queen_moves.len(), 27);
    }

    #[test]
    fn diagonally_pinned_queen_keeps_the_diagonal() {
        let mut game = GameState::from_fen("k7/8/8/8/7b/8/5Q2/4K3 w - - 0 1")
            .expect("position should parse");
        let from = algebraic_to_square("f2").expect("square should parse");
        let queen_moves: Vec<_> = generate_legal_moves(&mut game)
            .into_iter()
            .filter(|m| m.from == from)
            .collect();

        // g3 and the capture on h4 are the only legal queen moves.
        assert_eq!(queen_moves.len(), 2);
        assert!(queen_moves
            .iter()
            .any(|m| m.to == algebraic_to_square("h4").expect("square") && m.is_capture()));
    }
}
