//! Check and pin detection via ray casts from the king.
//!
//! Walks the four orthogonal and four diagonal rays outward from a king
//! square. The first allied non-king piece on a ray is a pin candidate,
//! confirmed when a matching line attacker sits behind it; the first enemy
//! piece is a check when its type attacks along that ray at that distance.
//! Knight checks are probed separately (knights cannot pin). The allied
//! king itself is transparent to the walk so the same routine can probe
//! hypothetical king destinations while the king still occupies its origin
//! square.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Ray directions indexed so `0..4` are orthogonal and `4..8` diagonal.
pub const RAY_DIRECTIONS: [Direction; 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Detect check status, pins and checking pieces for the side to move,
/// scanning from its current king square.
pub fn find_pins_and_checks(state: &GameState) -> (bool, Vec<Pin>, Vec<CheckThreat>) {
    let side = state.side_to_move;
    find_pins_and_checks_from(state, state.king_square(side), side)
}

/// Detect check status, pins and checking pieces for `side` as if its king
/// stood on `king_sq`. The board is not modified; the side's actual king is
/// skipped during ray walks, so callers may probe candidate king
/// destinations directly.
pub fn find_pins_and_checks_from(
    state: &GameState,
    king_sq: Square,
    side: Color,
) -> (bool, Vec<Pin>, Vec<CheckThreat>) {
    let enemy = side.opposite();
    let mut in_check = false;
    let mut pins = Vec::new();
    let mut checks = Vec::new();

    for (ray_index, &direction) in RAY_DIRECTIONS.iter().enumerate() {
        let mut possible_pin: Option<Pin> = None;

        for step in 1..8 {
            let Some(target) = offset_square(king_sq, direction, step) else {
                break;
            };
            let Some(piece) = state.piece_at(target) else {
                continue;
            };

            if piece.color == side {
                if piece.kind == PieceKind::King {
                    // The probing side's own king: transparent.
                    continue;
                }
                if possible_pin.is_none() {
                    possible_pin = Some(Pin {
                        square: target,
                        direction,
                    });
                } else {
                    // Second allied piece; no pin or check on this ray.
                    break;
                }
                continue;
            }

            if ray_attacks(piece, ray_index, step, direction, enemy) {
                match possible_pin {
                    None => {
                        in_check = true;
                        checks.push(CheckThreat {
                            attacker: target,
                            direction,
                        });
                    }
                    Some(pin) => pins.push(pin),
                }
            }
            break;
        }
    }

    for &offset in &KNIGHT_OFFSETS {
        let Some(target) = offset_square(king_sq, offset, 1) else {
            continue;
        };
        if let Some(piece) = state.piece_at(target) {
            if piece.color == enemy && piece.kind == PieceKind::Knight {
                in_check = true;
                checks.push(CheckThreat {
                    attacker: target,
                    direction: offset,
                });
            }
        }
    }

    (in_check, pins, checks)
}

/// Whether `piece` (an enemy piece found `step` squares along ray
/// `ray_index`) attacks the ray's origin.
fn ray_attacks(piece: Piece, ray_index: usize, step: i8, direction: Direction, enemy: Color) -> bool {
    match piece.kind {
        PieceKind::Rook => ray_index < 4,
        PieceKind::Bishop => ray_index >= 4,
        PieceKind::Queen => true,
        PieceKind::King => step == 1,
        PieceKind::Pawn => {
            // A pawn attacks the origin only from the adjacent diagonal
            // square on the side it captures toward.
            step == 1
                && direction.0 != 0
                && direction.1
                    == match enemy {
                        Color::White => -1,
                        Color::Black => 1,
                    }
        }
        PieceKind::Knight => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn startpos_has_no_checks_or_pins() {
        let game = GameState::new_game();
        let (in_check, pins, checks) = find_pins_and_checks(&game);
        assert!(!in_check);
        assert!(pins.is_empty());
        assert!(checks.is_empty());
    }

    #[test]
    fn rook_checks_along_open_file() {
        let game = GameState::from_fen("k3r3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("position should parse");
        let (in_check, pins, checks) = find_pins_and_checks(&game);
        assert!(in_check);
        assert!(pins.is_empty());
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].attacker, sq("e8"));
        assert_eq!(checks[0].direction, (0, 1));
    }

    #[test]
    fn blocking_piece_is_reported_as_pinned() {
        let game = GameState::from_fen("k3r3/8/8/8/8/4R3/8/4K3 w - - 0 1")
            .expect("position should parse");
        let (in_check, pins, checks) = find_pins_and_checks(&game);
        assert!(!in_check);
        assert!(checks.is_empty());
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].square, sq("e3"));
        assert_eq!(pins[0].direction, (0, 1));
    }

    #[test]
    fn two_blockers_mean_no_pin() {
        let game = GameState::from_fen("k3r3/8/4N3/8/8/4R3/8/4K3 w - - 0 1")
            .expect("position should parse");
        let (in_check, pins, checks) = find_pins_and_checks(&game);
        assert!(!in_check);
        assert!(pins.is_empty());
        assert!(checks.is_empty());
    }

    #[test]
    fn knight_checks_are_detected_without_pinning() {
        let game = GameState::from_fen("k7/8/8/8/8/3n4/8/4K3 w - - 0 1")
            .expect("position should parse");
        let (in_check, pins, checks) = find_pins_and_checks(&game);
        assert!(in_check);
        assert!(pins.is_empty());
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].attacker, sq("d3"));
    }

    #[test]
    fn pawn_checks_only_from_capture_diagonals() {
        let checked = GameState::from_fen("k7/8/8/8/8/8/3p4/4K3 w - - 0 1")
            .expect("position should parse");
        let (in_check, _, checks) = find_pins_and_checks(&checked);
        assert!(in_check);
        assert_eq!(checks.len(), 1);

        // A pawn directly in front of the king gives no check.
        let quiet = GameState::from_fen("k7/8/8/8/8/8/4p3/4K3 w - - 0 1")
            .expect("position should parse");
        let (in_check, _, checks) = find_pins_and_checks(&quiet);
        assert!(!in_check);
        assert!(checks.is_empty());
    }

    #[test]
    fn double_check_reports_both_attackers() {
        let game = GameState::from_fen("k3r3/8/8/8/8/5n2/8/4K3 w - - 0 1")
            .expect("position should parse");
        let (in_check, _, checks) = find_pins_and_checks(&game);
        assert!(in_check);
        assert_eq!(checks.len(), 2);
    }

    #[test]
    fn probing_a_destination_sees_through_the_departing_king() {
        // Rook on e8 checks e1; the king square d1 is probed while the
        // king still stands on e1, which must not shield d1's file... nor
        // block the rook's e-file when probing e2.
        let game = GameState::from_fen("k3r3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("position should parse");

        let (check_on_d1, _, _) = find_pins_and_checks_from(&game, sq("d1"), Color::White);
        assert!(!check_on_d1);

        let (check_on_e2, _, _) = find_pins_and_checks_from(&game, sq("e2"), Color::White);
        assert!(check_on_e2);
    }

    #[test]
    fn adjacent_enemy_king_attacks_candidate_square() {
        let game = GameState::from_fen("8/8/8/8/2k5/8/2K5/8 w - - 0 1")
            .expect("position should parse");
        let (check_on_c3, _, _) = find_pins_and_checks_from(&game, sq("c3"), Color::White);
        assert!(check_on_c3);
        let (check_on_a2, _, _) = find_pins_and_checks_from(&game, sq("a2"), Color::White);
        assert!(!check_on_a2);
    }
}
