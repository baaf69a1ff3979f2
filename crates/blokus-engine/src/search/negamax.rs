//! Four-player alpha-beta search.
//!
//! The root player and its teammate are the searching side: on their turns a
//! child's value is negated and the window swapped, as in negamax. On the two
//! opponents' turns the window is handed down unchanged and the child's value
//! is taken as is. Every node raises `alpha` on strict improvement and cuts
//! once `alpha >= beta`, returning `alpha`.

use blokus_core::{Board, Move, Player, generate_legal_moves};

use crate::eval::{Score, evaluate};
use crate::search::cache::{Bound, CacheEntry, MoveCache};
use crate::search::control::SearchControl;

/// Score representing an unreachable upper/lower bound.
pub const INF: Score = 1_000_000;

/// Whether a node with `turn` to move negates its children's values.
#[inline]
pub fn negates(turn: Player, maximizer: Player) -> bool {
    turn == maximizer || turn == maximizer.teammate()
}

/// Search state threaded through alpha-beta calls.
pub(super) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    /// Player the search is deciding for.
    pub maximizer: Player,
    /// Per-decision cache.
    pub cache: &'a mut MoveCache,
    /// Search control (stop flag).
    pub control: &'a SearchControl,
    /// Set once the stop flag has been seen; all values after that are garbage.
    pub aborted: bool,
    /// Set when some leaf was cut off by the depth bound.
    pub depth_limited: bool,
}

impl SearchContext<'_> {
    /// Count a node and report whether the search has been stopped.
    ///
    /// The flag is read at every node.
    fn tick(&mut self) -> bool {
        self.nodes += 1;
        if !self.aborted && self.control.should_stop() {
            self.aborted = true;
        }
        self.aborted
    }
}

/// Depth-bounded alpha-beta from `turn`'s perspective.
pub(super) fn alpha_beta(
    board: &Board,
    depth: u8,
    turn: Player,
    mut alpha: Score,
    beta: Score,
    ctx: &mut SearchContext<'_>,
) -> Score {
    if ctx.tick() {
        return 0;
    }

    if depth == 0 {
        ctx.depth_limited = true;
        return evaluate(board, turn);
    }

    if let Some(entry) = ctx.cache.probe(board, turn, depth)
        && let Some(score) = entry.usable(alpha, beta)
    {
        if !entry.exhaustive {
            ctx.depth_limited = true;
        }
        return score;
    }

    let moves = generate_legal_moves(board, turn);
    if moves.is_empty() {
        return evaluate(board, turn);
    }

    // Track depth cutoffs for this subtree separately from its siblings.
    let outer_limited = std::mem::replace(&mut ctx.depth_limited, false);
    let original_alpha = alpha;
    let negate = negates(turn, ctx.maximizer);
    let next = turn.next();

    for mv in &moves {
        let child = board.apply(*mv, turn);
        let score = if negate {
            -alpha_beta(&child, depth - 1, next, -beta, -alpha, ctx)
        } else {
            alpha_beta(&child, depth - 1, next, alpha, beta, ctx)
        };

        if ctx.aborted {
            ctx.depth_limited |= outer_limited;
            return 0;
        }

        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    let exhaustive = !ctx.depth_limited;
    ctx.depth_limited |= outer_limited;

    let bound = if alpha >= beta {
        Bound::Lower
    } else if alpha <= original_alpha {
        Bound::Upper
    } else {
        Bound::Exact
    };
    ctx.cache.store(
        board,
        turn,
        depth,
        CacheEntry {
            score: alpha,
            bound,
            exhaustive,
        },
    );

    alpha
}

/// Search the root for `ctx.maximizer` to `depth` plies.
///
/// Returns `None` for the move when the maximizer has no placement; the
/// score is then the static evaluation. Otherwise the best move defaults to
/// the first generated move and is replaced only on strict improvement.
pub(super) fn root_search(
    board: &Board,
    depth: u8,
    ctx: &mut SearchContext<'_>,
) -> (Option<Move>, Score) {
    let player = ctx.maximizer;
    if ctx.tick() {
        return (None, 0);
    }

    let moves = generate_legal_moves(board, player);
    let Some(first) = moves.first() else {
        return (None, evaluate(board, player));
    };
    if depth == 0 {
        ctx.depth_limited = true;
        return (Some(first), evaluate(board, player));
    }

    let mut best_move = first;
    let mut alpha = -INF;
    let beta = INF;
    let next = player.next();

    for mv in &moves {
        let child = board.apply(*mv, player);
        let score = -alpha_beta(&child, depth - 1, next, -beta, -alpha, ctx);
        if ctx.aborted {
            break;
        }
        if score > alpha {
            alpha = score;
            best_move = *mv;
        }
    }

    (Some(best_move), alpha)
}

/// Unpruned, uncached reference search with the same turn rule as [`alpha_beta`].
///
/// Exponential; meant for checking the real search on tiny boards.
pub fn minimax(board: &Board, depth: u8, turn: Player, maximizer: Player) -> Score {
    if depth == 0 {
        return evaluate(board, turn);
    }
    let moves = generate_legal_moves(board, turn);
    if moves.is_empty() {
        return evaluate(board, turn);
    }

    let negate = negates(turn, maximizer);
    let mut best = -INF;
    for mv in &moves {
        let child = board.apply(*mv, turn);
        let v = minimax(&child, depth - 1, turn.next(), maximizer);
        best = best.max(if negate { -v } else { v });
    }
    best
}

/// Root of [`minimax`]: the first move reaching the maximum, and that maximum.
pub fn minimax_root(board: &Board, depth: u8, player: Player) -> (Option<Move>, Score) {
    let moves = generate_legal_moves(board, player);
    if moves.is_empty() || depth == 0 {
        return (moves.first(), evaluate(board, player));
    }

    let mut best: Option<(Move, Score)> = None;
    for mv in &moves {
        let child = board.apply(*mv, player);
        let v = -minimax(&child, depth - 1, player.next(), player);
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((*mv, v));
        }
    }
    match best {
        Some((mv, score)) => (Some(mv), score),
        None => (None, evaluate(board, player)),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    use blokus_core::{Catalog, Piece, Point};

    use super::*;

    fn catalog() -> Arc<Catalog> {
        let pieces = vec![
            Piece::monomino(),
            Piece::new(vec![Point::new(0, 0), Point::new(1, 0)]),
        ];
        Arc::new(Catalog::uniform(pieces).unwrap())
    }

    fn run_root(board: &Board, depth: u8, player: Player) -> (Option<Move>, Score, bool) {
        let mut cache = MoveCache::new();
        let control = SearchControl::new_infinite(Arc::new(AtomicBool::new(false)));
        let mut ctx = SearchContext {
            nodes: 0,
            maximizer: player,
            cache: &mut cache,
            control: &control,
            aborted: false,
            depth_limited: false,
        };
        let (mv, score) = root_search(board, depth, &mut ctx);
        (mv, score, ctx.depth_limited)
    }

    #[test]
    fn teammate_and_self_negate_opponents_pass_through() {
        let p0 = Player::ALL[0];
        assert!(negates(p0, p0));
        assert!(negates(Player::ALL[3], p0));
        assert!(!negates(Player::ALL[1], p0));
        assert!(!negates(Player::ALL[2], p0));
    }

    #[test]
    fn root_matches_oracle_on_small_board() {
        let board = Board::new(4, catalog()).unwrap();
        for depth in 1..=3 {
            let (mv, score, _) = run_root(&board, depth, Player::ALL[0]);
            let (oracle_mv, oracle_score) = minimax_root(&board, depth, Player::ALL[0]);
            assert_eq!(score, oracle_score, "score mismatch at depth {depth}");
            assert_eq!(mv, oracle_mv, "move mismatch at depth {depth}");
        }
    }

    #[test]
    fn no_moves_yields_none_and_static_eval() {
        let board = Board::new(4, catalog())
            .unwrap()
            .with_cell(Point::new(0, 0), blokus_core::Cell::Dead);
        let (mv, score, _) = run_root(&board, 3, Player::ALL[0]);
        assert_eq!(mv, None);
        assert_eq!(score, evaluate(&board, Player::ALL[0]));
    }

    #[test]
    fn shallow_tree_is_flagged_depth_limited() {
        let board = Board::new(4, catalog()).unwrap();
        let (_, _, limited) = run_root(&board, 1, Player::ALL[0]);
        assert!(limited);
    }

    #[test]
    fn tree_shorter_than_depth_is_exhaustive() {
        // One monomino each: after four placements player 0 has nothing left.
        let cat = Arc::new(Catalog::uniform(vec![Piece::monomino()]).unwrap());
        let board = Board::new(4, cat).unwrap();
        let (mv, _, limited) = run_root(&board, 8, Player::ALL[0]);
        assert!(mv.is_some());
        assert!(!limited);
    }

    #[test]
    fn raised_stop_flag_aborts() {
        let board = Board::new(5, catalog()).unwrap();
        let mut cache = MoveCache::new();
        let control = SearchControl::new_infinite(Arc::new(AtomicBool::new(true)));
        let mut ctx = SearchContext {
            nodes: 0,
            maximizer: Player::ALL[0],
            cache: &mut cache,
            control: &control,
            aborted: false,
            depth_limited: false,
        };
        let _ = root_search(&board, 4, &mut ctx);
        assert!(ctx.aborted);
        assert_eq!(ctx.nodes, 1, "the root node already sees the flag");
    }
}
