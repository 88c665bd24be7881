//! Helpers shared by the per-piece move generators.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

/// Pin direction for the piece on `square`, if any. Detection runs before
/// generation, so this is a lookup into the current query's pin list.
#[inline]
pub fn pin_direction_for(pins: &[Pin], square: Square) -> Option<Direction> {
    pins.iter()
        .find(|pin| pin.square == square)
        .map(|pin| pin.direction)
}

/// A pinned piece may still move along its pin axis, toward or away from
/// the king; any other direction exposes the king.
#[inline]
pub fn pin_allows(pin: Option<Direction>, direction: Direction) -> bool {
    match pin {
        None => true,
        Some(axis) => axis == direction || axis == (-direction.0, -direction.1),
    }
}

/// Walk each of `directions` from `from` until the board edge or a piece,
/// pushing quiet moves and a final capture. Pin constraints are applied per
/// direction so a pinned slider keeps its along-axis moves.
pub fn generate_slider_moves(
    state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    moves: &mut Vec<ChessMove>,
) {
    let pin = pin_direction_for(&state.pins, from);

    for &direction in directions {
        if !pin_allows(pin, direction) {
            continue;
        }
        for step in 1..8 {
            let Some(target) = offset_square(from, direction, step) else {
                break;
            };
            match state.piece_at(target) {
                None => moves.push(ChessMove::new(from, target, piece, None)),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        moves.push(ChessMove::new(from, target, piece, Some(occupant)));
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_allows_axis_and_reverse_only() {
        assert!(pin_allows(None, (1, 0)));
        assert!(pin_allows(Some((0, 1)), (0, 1)));
        assert!(pin_allows(Some((0, 1)), (0, -1)));
        assert!(!pin_allows(Some((0, 1)), (1, 0)));
        assert!(!pin_allows(Some((1, 1)), (1, -1)));
    }

    #[test]
    fn slider_walk_stops_at_blockers() {
        let game = GameState::from_fen("k7/8/8/8/4p3/8/4R3/4K3 w - - 0 1")
            .expect("position should parse");
        let rook = game.piece_at(12).expect("e2 should hold the rook");

        let mut moves = Vec::new();
        generate_slider_moves(&game, 12, rook, &[(0, 1), (0, -1)], &mut moves);

        // Up: e3 quiet, e4 capture. Down: blocked by the own king on e1.
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to == 20 && !m.is_capture()));
        assert!(moves.iter().any(|m| m.to == 28 && m.is_capture()));
    }
}
