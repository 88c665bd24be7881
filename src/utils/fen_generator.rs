//! GameState-to-FEN generator.
//!
//! The inverse of the parser. Clock fields are emitted as `0 1` since the
//! state model does not track them.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut fen = String::with_capacity(80);

    for rank in (0..8u8).rev() {
        let mut empty_run = 0u8;
        for file in 0..8u8 {
            match game_state.board[square_at(file, rank) as usize] {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    fen.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push(char::from(b'0' + empty_run));
        }
        if rank > 0 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match game_state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    fen.push(' ');
    fen.push_str(&castling_rights_field(game_state.castling_rights));

    fen.push(' ');
    match game_state.en_passant_square {
        // The target square always lies on rank 3 or 6, so conversion
        // cannot fail for a well-formed state.
        Some(sq) => fen.push_str(&square_to_algebraic(sq).unwrap_or_else(|_| "-".to_owned())),
        None => fen.push('-'),
    }

    fen.push_str(" 0 1");
    fen
}

fn castling_rights_field(rights: CastlingRights) -> String {
    if rights == 0 {
        return "-".to_owned();
    }

    let mut field = String::with_capacity(4);
    if rights & CASTLE_WHITE_KINGSIDE != 0 {
        field.push('K');
    }
    if rights & CASTLE_WHITE_QUEENSIDE != 0 {
        field.push('Q');
    }
    if rights & CASTLE_BLACK_KINGSIDE != 0 {
        field.push('k');
    }
    if rights & CASTLE_BLACK_QUEENSIDE != 0 {
        field.push('q');
    }
    field
}

fn piece_to_fen_char(piece: Piece) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => lower.to_ascii_uppercase(),
        Color::Black => lower,
    }
}
