//! Iterative-deepening search over the four-player game tree.

pub mod cache;
pub mod control;
pub mod negamax;

use blokus_core::{Board, Move, Player};
use tracing::debug;

use crate::eval::Score;
use cache::MoveCache;
use control::SearchControl;
use negamax::{SearchContext, root_search};

/// Result of a completed search iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move at this depth, `None` only when the player cannot move.
    pub best_move: Option<Move>,
    /// Value of the best move from the searching player's perspective.
    pub score: Score,
    /// Depth of the iteration that produced this result.
    pub depth: u8,
    /// Total nodes visited by the decision so far.
    pub nodes: u64,
}

/// Iterative-deepening searcher owning the per-decision cache.
#[derive(Debug, Default)]
pub struct Searcher {
    cache: MoveCache,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries stored by the last search.
    pub fn cache(&self) -> &MoveCache {
        &self.cache
    }

    /// Run iterative deepening for `player` up to `max_depth`.
    ///
    /// Calls `on_iter` after each completed iteration. Stops early when the
    /// control says so or when an iteration reached the end of every line
    /// without hitting the depth bound. An iteration cut short by the stop
    /// flag is discarded. Returns `None` if no iteration completed.
    pub fn search<F>(
        &mut self,
        board: &Board,
        player: Player,
        max_depth: u8,
        control: &SearchControl,
        mut on_iter: F,
    ) -> Option<SearchResult>
    where
        F: FnMut(&SearchResult),
    {
        self.cache.clear();

        let mut ctx = SearchContext {
            nodes: 0,
            maximizer: player,
            cache: &mut self.cache,
            control,
            aborted: false,
            depth_limited: false,
        };

        let mut completed: Option<SearchResult> = None;

        for depth in 1..=max_depth {
            if control.should_stop_iterating() {
                break;
            }

            ctx.depth_limited = false;
            let (best_move, score) = root_search(board, depth, &mut ctx);

            // If search was aborted mid-iteration, discard this iteration's result
            if ctx.aborted {
                break;
            }

            let result = SearchResult {
                best_move,
                score,
                depth,
                nodes: ctx.nodes,
            };
            debug!(
                depth,
                score,
                nodes = ctx.nodes,
                cache_hits = ctx.cache.hits(),
                cache_entries = ctx.cache.len(),
                best = %best_move.map_or_else(|| "none".to_string(), |m| m.to_string()),
                "iteration complete"
            );
            on_iter(&result);
            completed = Some(result);

            if best_move.is_none() || !ctx.depth_limited {
                debug!(depth, "game tree exhausted");
                break;
            }
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use blokus_core::{Catalog, Piece, Point, is_legal};

    use super::*;

    fn board(n: usize) -> Board {
        let pieces = vec![
            Piece::new(vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]),
            Piece::new(vec![Point::new(0, 0), Point::new(1, 0)]),
            Piece::monomino(),
        ];
        Board::new(n, Arc::new(Catalog::uniform(pieces).unwrap())).unwrap()
    }

    fn infinite() -> SearchControl {
        SearchControl::new_infinite(Arc::new(AtomicBool::new(false)))
    }

    #[test]
    fn reports_every_depth_in_order() {
        let b = board(6);
        let mut searcher = Searcher::new();
        let mut depths = Vec::new();
        let result = searcher
            .search(&b, Player::ALL[0], 3, &infinite(), |r| depths.push(r.depth))
            .unwrap();
        assert_eq!(depths, vec![1, 2, 3]);
        assert_eq!(result.depth, 3);
        assert!(is_legal(&b, result.best_move.unwrap(), Player::ALL[0]));
    }

    #[test]
    fn stops_once_tree_is_exhausted() {
        let cat = Arc::new(Catalog::uniform(vec![Piece::monomino()]).unwrap());
        let b = Board::new(4, cat).unwrap();
        let mut searcher = Searcher::new();
        let result = searcher
            .search(&b, Player::ALL[0], 64, &infinite(), |_| {})
            .unwrap();
        // Four placements end player 0's game; depth 5 already sees every line end.
        assert!(result.depth <= 5, "searched to depth {}", result.depth);
    }

    #[test]
    fn stopped_before_start_completes_nothing() {
        let stopped = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new_infinite(Arc::clone(&stopped));
        stopped.store(true, Ordering::Release);
        let mut searcher = Searcher::new();
        assert!(searcher.search(&board(6), Player::ALL[0], 10, &control, |_| {}).is_none());
    }

    #[test]
    fn expired_deadline_completes_nothing() {
        let control =
            SearchControl::new_timed(Arc::new(AtomicBool::new(false)), Duration::ZERO);
        let mut searcher = Searcher::new();
        assert!(searcher.search(&board(6), Player::ALL[0], 10, &control, |_| {}).is_none());
    }

    #[test]
    fn player_without_moves_gets_no_move() {
        let b = board(4).with_cell(Point::new(3, 0), blokus_core::Cell::Dead);
        let mut searcher = Searcher::new();
        let result = searcher
            .search(&b, Player::ALL[1], 5, &infinite(), |_| {})
            .unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn cache_is_used_across_depths() {
        let b = board(5);
        let mut searcher = Searcher::new();
        let _ = searcher.search(&b, Player::ALL[0], 4, &infinite(), |_| {});
        assert!(!searcher.cache().is_empty());
        assert!(searcher.cache().hits() > 0);
    }
}
