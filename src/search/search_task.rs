//! Asynchronous search worker.
//!
//! Deep searches run on a dedicated thread that owns a private copy of the
//! game state, so the interactive side is never blocked and never shares
//! mutable position data with the search. The result comes back through a
//! single-slot channel the driver polls or awaits. Cancellation is
//! explicit: once `cancel` is called, any late worker result is discarded
//! and can never be surfaced, so no stale move reaches the board. A driver
//! whose task was cancelled before producing a result falls back to any
//! legal move (for example the random engine).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::search::searcher::{find_best_move, SearchAlgorithm, SearchReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTaskStatus {
    /// The worker is still searching.
    Pending,
    /// The task was cancelled; any result is discarded.
    Cancelled,
    /// The worker finished. `None` means the position had no legal moves.
    Finished(Option<SearchReport>),
}

pub struct SearchTask {
    receiver: Receiver<Option<SearchReport>>,
    cancelled: Arc<AtomicBool>,
}

impl SearchTask {
    /// Move `state` onto a worker thread and search it to `depth`. The
    /// worker generates the legal moves itself in deterministic order.
    pub fn spawn(state: GameState, depth: u8, algorithm: SearchAlgorithm) -> Self {
        Self::spawn_with_moves(state, None, depth, algorithm)
    }

    /// Like [`SearchTask::spawn`], but searching a caller-provided move
    /// list (for example pre-shuffled for variety).
    pub fn spawn_with_moves(
        mut state: GameState,
        moves: Option<Vec<ChessMove>>,
        depth: u8,
        algorithm: SearchAlgorithm,
    ) -> Self {
        let (sender, receiver) = mpsc::sync_channel(1);
        let cancelled = Arc::new(AtomicBool::new(false));
        let worker_flag = Arc::clone(&cancelled);

        thread::spawn(move || {
            let moves = moves.unwrap_or_else(|| generate_legal_moves(&mut state));
            if worker_flag.load(Ordering::Relaxed) {
                return;
            }
            let report = find_best_move(&mut state, &moves, depth, algorithm);
            if !worker_flag.load(Ordering::Relaxed) {
                // A dropped receiver just discards the result.
                let _ = sender.send(report);
            }
        });

        Self {
            receiver,
            cancelled,
        }
    }

    /// Non-blocking poll.
    pub fn poll(&self) -> SearchTaskStatus {
        if self.is_cancelled() {
            // Drain anything the worker managed to send before the flag
            // was observed.
            let _ = self.receiver.try_recv();
            return SearchTaskStatus::Cancelled;
        }
        match self.receiver.try_recv() {
            Ok(report) => SearchTaskStatus::Finished(report),
            Err(TryRecvError::Empty) => SearchTaskStatus::Pending,
            Err(TryRecvError::Disconnected) => SearchTaskStatus::Finished(None),
        }
    }

    /// Block until the worker finishes. Returns `None` for a cancelled
    /// task, a disconnected worker, or a position without legal moves.
    pub fn wait(self) -> Option<SearchReport> {
        if self.is_cancelled() {
            return None;
        }
        self.receiver.recv().ok().flatten()
    }

    /// Mark the task cancelled. The worker is not interrupted mid-search;
    /// its eventual result is simply never delivered.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
