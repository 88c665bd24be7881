//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped behind a single trait interface.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Search depth override in plies; engines fall back to their own
    /// configured depth when absent.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// `None` when the position has no legal moves.
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose a move for the side to move. Engines work on their own copy
    /// of the state and must leave the caller's position untouched.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
