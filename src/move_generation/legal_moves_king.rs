//! King move generation, including castling.
//!
//! Every candidate destination is probed by rerunning check detection as if
//! the king already stood there; the detector treats the departing king as
//! transparent, so retreats along a checking ray are correctly rejected.

use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_ROOK_HOME, BLACK_QUEENSIDE_ROOK_HOME, WHITE_KINGSIDE_ROOK_HOME,
    WHITE_QUEENSIDE_ROOK_HOME,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{find_pins_and_checks_from, RAY_DIRECTIONS};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_king_moves(
    state: &GameState,
    from: Square,
    king: Piece,
    moves: &mut Vec<ChessMove>,
) {
    for &direction in &RAY_DIRECTIONS {
        let Some(target) = offset_square(from, direction, 1) else {
            continue;
        };
        let occupant = state.piece_at(target);
        if occupant.is_some_and(|piece| piece.color == king.color) {
            continue;
        }

        let (would_be_in_check, _, _) = find_pins_and_checks_from(state, target, king.color);
        if !would_be_in_check {
            moves.push(ChessMove::new(from, target, king, occupant));
        }
    }
}

/// Castling moves for the king on `from`. Requires the mover not to be in
/// check (the caller has already refreshed `state.in_check`), the relevant
/// right, empty between-squares, an allied rook on its home square, and an
/// unattacked king path.
pub fn generate_castle_moves(
    state: &GameState,
    from: Square,
    king: Piece,
    moves: &mut Vec<ChessMove>,
) {
    if state.in_check {
        return;
    }
    // Castling geometry assumes the king on its home file; a set right with
    // the king elsewhere can only come from an inconsistent setup.
    if file_of(from) != 4 {
        return;
    }

    let (kingside_right, queenside_right, kingside_rook, queenside_rook) = match king.color {
        Color::White => (
            CASTLE_WHITE_KINGSIDE,
            CASTLE_WHITE_QUEENSIDE,
            WHITE_KINGSIDE_ROOK_HOME,
            WHITE_QUEENSIDE_ROOK_HOME,
        ),
        Color::Black => (
            CASTLE_BLACK_KINGSIDE,
            CASTLE_BLACK_QUEENSIDE,
            BLACK_KINGSIDE_ROOK_HOME,
            BLACK_QUEENSIDE_ROOK_HOME,
        ),
    };

    if state.castling_rights & kingside_right != 0
        && rook_at_home(state, kingside_rook, king.color)
        && state.piece_at(from + 1).is_none()
        && state.piece_at(from + 2).is_none()
        && path_is_safe(state, king.color, &[from + 1, from + 2])
    {
        moves.push(ChessMove::castle(from, from + 2, king));
    }

    if state.castling_rights & queenside_right != 0
        && rook_at_home(state, queenside_rook, king.color)
        && state.piece_at(from - 1).is_none()
        && state.piece_at(from - 2).is_none()
        && state.piece_at(from - 3).is_none()
        && path_is_safe(state, king.color, &[from - 1, from - 2])
    {
        moves.push(ChessMove::castle(from, from - 2, king));
    }
}

fn rook_at_home(state: &GameState, home: Square, color: Color) -> bool {
    state.piece_at(home) == Some(Piece::new(color, PieceKind::Rook))
}

fn path_is_safe(state: &GameState, color: Color, squares: &[Square]) -> bool {
    squares.iter().all(|&sq| {
        let (attacked, _, _) = find_pins_and_checks_from(state, sq, color);
        !attacked
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn castles(state: &mut GameState) -> Vec<ChessMove> {
        generate_legal_moves(state)
            .into_iter()
            .filter(|m| m.is_castle)
            .collect()
    }

    #[test]
    fn king_cannot_step_into_attacked_squares() {
        let mut game = GameState::from_fen("k7/8/8/8/8/8/r7/4K3 w - - 0 1")
            .expect("position should parse");
        let king_moves: Vec<_> = generate_legal_moves(&mut game)
            .into_iter()
            .filter(|m| m.from == sq("e1"))
            .collect();
        // The rook controls the whole second rank: d2, e2, f2 are out.
        assert_eq!(king_moves.len(), 2);
        assert!(king_moves.iter().any(|m| m.to == sq("d1")));
        assert!(king_moves.iter().any(|m| m.to == sq("f1")));
    }

    #[test]
    fn kings_must_keep_their_distance() {
        let mut game = GameState::from_fen("8/8/8/8/2k5/8/2K5/8 w - - 0 1")
            .expect("position should parse");
        let king_moves = generate_legal_moves(&mut game);
        // b3, c3, d3 face the enemy king directly.
        assert_eq!(king_moves.len(), 5);
        assert!(!king_moves.iter().any(|m| rank_of(m.to) == 2));
    }

    #[test]
    fn both_castles_available_on_an_open_home_rank() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("position should parse");
        let castle_moves = castles(&mut game);
        assert_eq!(castle_moves.len(), 2);
        assert!(castle_moves.iter().any(|m| m.to == sq("g1")));
        assert!(castle_moves.iter().any(|m| m.to == sq("c1")));
    }

    #[test]
    fn castling_requires_the_right_to_be_held() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1")
            .expect("position should parse");
        let castle_moves = castles(&mut game);
        assert_eq!(castle_moves.len(), 1);
        assert_eq!(castle_moves[0].to, sq("c1"));
    }

    #[test]
    fn castling_blocked_by_intervening_pieces() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1")
            .expect("position should parse");
        assert!(castles(&mut game).is_empty());
    }

    #[test]
    fn cannot_castle_out_of_check() {
        let mut game = GameState::from_fen("r3k2r/8/8/8/8/4r3/8/R3K2R w KQkq - 0 1")
            .expect("position should parse");
        assert!(castles(&mut game).is_empty());
    }

    #[test]
    fn cannot_castle_through_an_attacked_square() {
        // A rook on f8 covers f1, ruling out kingside castling only.
        let mut game = GameState::from_fen("r4r2/8/8/1k6/8/8/8/R3K2R w KQ - 0 1")
            .expect("position should parse");
        let castle_moves = castles(&mut game);
        assert_eq!(castle_moves.len(), 1);
        assert_eq!(castle_moves[0].to, sq("c1"));
    }

    #[test]
    fn queenside_b_file_attack_does_not_block_castling() {
        // b1 is attacked but the king never crosses it.
        let mut game = GameState::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1")
            .expect("position should parse");
        let castle_moves = castles(&mut game);
        assert_eq!(castle_moves.len(), 1);
        assert_eq!(castle_moves[0].to, sq("c1"));
    }
}
