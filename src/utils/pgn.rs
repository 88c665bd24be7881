//! PGN export for finished or in-progress games.
//!
//! Serializes the game's move history (the undo stack holds every move
//! since the initial position) to a dated seven-tag PGN with the crate's
//! derived notation as movetext.

use chrono::Local;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

/// Result strings follow PGN conventions: `1-0`, `0-1`, `1/2-1/2` or `*`
/// for an unfinished game.
pub fn write_pgn(state: &GameState, white: &str, black: &str, result: &str) -> String {
    let result = normalize_result(result);
    let mut out = String::new();

    out.push_str("[Event \"Casual Game\"]\n");
    out.push_str("[Site \"Local\"]\n");
    out.push_str(&format!(
        "[Date \"{}\"]\n",
        Local::now().format("%Y.%m.%d")
    ));
    out.push_str("[Round \"-\"]\n");
    out.push_str(&format!("[White \"{}\"]\n", escape_pgn_value(white)));
    out.push_str(&format!("[Black \"{}\"]\n", escape_pgn_value(black)));
    out.push_str(&format!("[Result \"{result}\"]\n"));
    out.push('\n');

    let mut movetext = Vec::with_capacity(state.undo_stack.len() + 1);
    for (ply, undo) in state.undo_stack.iter().enumerate() {
        let notation = undo.mv.notation();
        if ply % 2 == 0 {
            movetext.push(format!("{}. {}", ply / 2 + 1, notation));
        } else {
            movetext.push(notation);
        }
    }
    movetext.push(result.to_owned());

    out.push_str(&movetext.join(" "));
    out.push('\n');
    out
}

/// Result string for a game that ended by checkmate, from the mated side.
pub fn checkmate_result(mated: Color) -> &'static str {
    match mated {
        Color::White => "0-1",
        Color::Black => "1-0",
    }
}

fn normalize_result(result: &str) -> &str {
    match result {
        "1-0" | "0-1" | "1/2-1/2" => result,
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move_unchecked;
    use crate::move_generation::legal_move_generator::generate_legal_moves;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn exports_numbered_movetext_with_headers() {
        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            let moves = generate_legal_moves(&mut game);
            let mv = *moves
                .iter()
                .find(|m| {
                    m.from == algebraic_to_square(from).expect("square")
                        && m.to == algebraic_to_square(to).expect("square")
                })
                .expect("move should be legal");
            apply_move_unchecked(&mut game, &mv);
        }

        let pgn = write_pgn(&game, "Engine A", "Engine B", "*");
        assert!(pgn.contains("[White \"Engine A\"]"));
        assert!(pgn.contains("[Black \"Engine B\"]"));
        assert!(pgn.contains("[Result \"*\"]"));
        assert!(pgn.contains("1. e4 e5 2. Nf3 *"));
    }

    #[test]
    fn unknown_results_fall_back_to_unfinished() {
        let game = GameState::new_game();
        let pgn = write_pgn(&game, "w", "b", "resigned?");
        assert!(pgn.contains("[Result \"*\"]"));
    }

    #[test]
    fn quotes_in_names_are_escaped() {
        let game = GameState::new_game();
        let pgn = write_pgn(&game, "The \"Best\"", "b", "1-0");
        assert!(pgn.contains("[White \"The \\\"Best\\\"\"]"));
    }

    #[test]
    fn checkmate_result_is_from_the_mated_side() {
        assert_eq!(checkmate_result(Color::White), "0-1");
        assert_eq!(checkmate_result(Color::Black), "1-0");
    }
}
