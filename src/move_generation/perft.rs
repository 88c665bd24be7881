//! Perft: exhaustive legal-move enumeration to a fixed depth.
//!
//! The primary validation tool for the move generator. Counts leaf nodes
//! plus capture/en-passant/castle/promotion breakdowns over make/unmake
//! recursion. Promotions fan out to a single queen move, so only reference
//! positions without promotion nodes at the tested depth are comparable to
//! published figures.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move_unchecked, undo_move};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn count_leaf(&mut self, mv: &ChessMove) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant {
            self.en_passant += 1;
        }
        if mv.is_castle {
            self.castles += 1;
        }
        if mv.is_promotion {
            self.promotions += 1;
        }
    }
}

pub fn perft(state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut counts = PerftCounts::default();
    let moves = generate_legal_moves(state);

    for mv in moves {
        if depth == 1 {
            counts.count_leaf(&mv);
        } else {
            apply_move_unchecked(state, &mv);
            counts.merge(perft(state, depth - 1));
            undo_move(state);
        }
    }

    counts
}

/// Leaf-node count only.
pub fn perft_nodes(state: &mut GameState, depth: u8) -> u64 {
    perft(state, depth).nodes
}
