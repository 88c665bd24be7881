//! Central mutable position model.
//!
//! `GameState` owns the board, side/rights/en-passant fields, cached king
//! squares, and the undo stack driven by make/unmake workflows. The
//! check/pin/terminal fields are transient caches refreshed by each
//! legal-move query.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    /// Mailbox board, `a1 = 0` through `h8 = 63`.
    pub board: [Option<Piece>; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    /// King squares by `Color::index()`, kept in lockstep with the board.
    pub king_squares: [Square; 2],

    /// One entry per applied move, popped by undo.
    pub undo_stack: Vec<UndoState>,

    // Transient fields, recomputed by generate_legal_moves.
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<CheckThreat>,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            king_squares: [0; 2],
            undo_stack: Vec::new(),
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }
}

impl GameState {
    /// Empty board; used as the FEN parser's scratch state.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position, White to move, full castling rights.
    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square as usize]
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// True once a legal-move query has flagged the position terminal.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }
}
