//! Anytime decisions under a wall-clock budget.
//!
//! Iterative deepening runs on a background thread and publishes each
//! completed iteration into a single-slot [`ResultSlot`]. The caller waits on
//! a channel for at most the budget, raises the stop flag, and takes whatever
//! the slot holds. The background thread is left to notice the flag and exit
//! on its own.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, mpsc};
use std::time::Duration;

use blokus_core::{Board, Move, Player, first_legal_move};
use tracing::{debug, info, warn};

use crate::search::control::SearchControl;
use crate::search::{SearchResult, Searcher};

/// Last-writer-wins holder for the deepest completed iteration.
#[derive(Debug, Default)]
pub struct ResultSlot {
    inner: Mutex<Option<SearchResult>>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held result.
    pub fn publish(&self, result: SearchResult) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = Some(result);
    }

    /// Copy of the held result, if any iteration completed.
    pub fn latest(&self) -> Option<SearchResult> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Where a decided move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// Best move of a completed iteration at `depth`.
    Search { depth: u8 },
    /// No iteration completed in time; first legal move in enumeration order.
    Fallback,
}

impl fmt::Display for MoveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveSource::Search { depth } => write!(f, "search depth {depth}"),
            MoveSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// Outcome of one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Play `mv`.
    Move { mv: Move, source: MoveSource },
    /// The player has no legal placement.
    NoLegalMoves,
}

impl Decision {
    /// The chosen move, if any.
    pub fn mv(&self) -> Option<Move> {
        match self {
            Decision::Move { mv, .. } => Some(*mv),
            Decision::NoLegalMoves => None,
        }
    }
}

/// Choose a move for `player` on `board` within `budget`.
///
/// Always returns a legal move when one exists: the deepest completed
/// iteration's best move, or the first legal move if none completed.
pub fn decide(board: &Board, player: Player, budget: Duration, max_depth: u8) -> Decision {
    let stopped = Arc::new(AtomicBool::new(false));
    let slot = Arc::new(ResultSlot::new());
    let (done_tx, done_rx) = mpsc::channel::<()>();

    let worker_board = board.clone();
    let worker_slot = Arc::clone(&slot);
    let control = SearchControl::new_timed(Arc::clone(&stopped), budget);

    let spawned = std::thread::Builder::new()
        .name("blokus-search".to_string())
        .spawn(move || {
            let mut searcher = Searcher::new();
            let _ = searcher.search(&worker_board, player, max_depth, &control, |result| {
                worker_slot.publish(result.clone());
            });
            // The receiver may already have given up waiting.
            let _ = done_tx.send(());
        });

    match spawned {
        Ok(_) => match done_rx.recv_timeout(budget) {
            Ok(()) => debug!("search finished within budget"),
            Err(mpsc::RecvTimeoutError::Timeout) => debug!(?budget, "budget expired"),
            Err(mpsc::RecvTimeoutError::Disconnected) => warn!("search thread exited early"),
        },
        Err(err) => warn!(%err, "failed to spawn search thread"),
    }
    stopped.store(true, Ordering::Release);

    match slot.latest() {
        Some(SearchResult {
            best_move: Some(mv),
            depth,
            score,
            nodes,
        }) => {
            info!(%mv, depth, score, nodes, "decided");
            Decision::Move {
                mv,
                source: MoveSource::Search { depth },
            }
        }
        Some(SearchResult { best_move: None, .. }) => Decision::NoLegalMoves,
        None => match first_legal_move(board, player) {
            Some(mv) => {
                info!(%mv, "no iteration completed, playing first legal move");
                Decision::Move {
                    mv,
                    source: MoveSource::Fallback,
                }
            }
            None => Decision::NoLegalMoves,
        },
    }
}
