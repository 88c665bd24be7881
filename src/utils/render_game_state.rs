//! Headless ASCII board rendering for logs and debugging.

use crate::game_state::chess_types::{square_at, Color};
use crate::game_state::game_state::GameState;

/// Render the board from White's side, rank 8 at the top. White pieces are
/// uppercase, black lowercase, empty squares dots.
pub fn render_ascii(state: &GameState) -> String {
    let mut out = String::with_capacity(200);

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');
        for file in 0..8u8 {
            let cell = match state.piece_at(square_at(file, rank)) {
                Some(piece) => {
                    let letter = piece.kind.letter();
                    match piece.color {
                        Color::White => letter,
                        Color::Black => letter.to_ascii_lowercase(),
                    }
                }
                None => '.',
            };
            out.push(cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out.push_str(match state.side_to_move {
        Color::White => "white to move\n",
        Color::Black => "black to move\n",
    });

    out
}

#[cfg(test)]
mod tests {
    use super::render_ascii;
    use crate::game_state::game_state::GameState;

    #[test]
    fn startpos_renders_all_ranks() {
        let game = GameState::new_game();
        let rendered = render_ascii(&game);
        assert!(rendered.starts_with("8 r n b q k b n r"));
        assert!(rendered.contains("1 R N B Q K B N R"));
        assert!(rendered.ends_with("white to move\n"));
    }
}
