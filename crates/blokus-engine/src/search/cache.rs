//! Per-decision move cache.
//!
//! Memoizes alpha-beta results keyed by the canonical board bytes, the
//! player to move, and the remaining depth. Each entry carries the bound
//! kind the value was produced under, so a value computed inside a narrow
//! window is only reused where it is still sound.

use std::collections::HashMap;

use blokus_core::{Board, Player};

use crate::eval::Score;

/// Bound kind of a cached value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The stored score is the exact value of the node.
    Exact,
    /// The stored score is a lower bound (the node failed high).
    Lower,
    /// The stored score is an upper bound (no move raised alpha).
    Upper,
}

/// A cached search value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    pub score: Score,
    pub bound: Bound,
    /// No leaf below this node was cut off by the depth bound.
    pub exhaustive: bool,
}

impl CacheEntry {
    /// Return the stored score if it settles a node searched with `(alpha, beta)`.
    pub fn usable(&self, alpha: Score, beta: Score) -> Option<Score> {
        let ok = match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        };
        ok.then_some(self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    board: Box<[u8]>,
    turn: Player,
    depth: u8,
}

/// Hash map from (position, turn, depth) to [`CacheEntry`].
#[derive(Debug, Default)]
pub struct MoveCache {
    entries: HashMap<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl MoveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all entries and reset the counters, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Look up the entry for `board` with `turn` to move at `depth`.
    pub fn probe(&mut self, board: &Board, turn: Player, depth: u8) -> Option<CacheEntry> {
        let key = CacheKey {
            board: board.canonical_key(),
            turn,
            depth,
        };
        let found = self.entries.get(&key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Insert or overwrite the entry for `board` with `turn` to move at `depth`.
    pub fn store(&mut self, board: &Board, turn: Player, depth: u8, entry: CacheEntry) {
        let key = CacheKey {
            board: board.canonical_key(),
            turn,
            depth,
        };
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blokus_core::{Catalog, Cell, Piece, Point};

    use super::*;

    fn board() -> Board {
        Board::new(4, Arc::new(Catalog::uniform(vec![Piece::monomino()]).unwrap())).unwrap()
    }

    fn exact(score: Score) -> CacheEntry {
        CacheEntry {
            score,
            bound: Bound::Exact,
            exhaustive: false,
        }
    }

    #[test]
    fn store_and_probe_roundtrip() {
        let mut cache = MoveCache::new();
        let b = board();
        let p0 = Player::ALL[0];
        cache.store(&b, p0, 3, exact(42));
        assert_eq!(cache.probe(&b, p0, 3), Some(exact(42)));
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn key_separates_turn_depth_and_position() {
        let mut cache = MoveCache::new();
        let b = board();
        let p0 = Player::ALL[0];
        cache.store(&b, p0, 3, exact(7));

        assert!(cache.probe(&b, Player::ALL[1], 3).is_none());
        assert!(cache.probe(&b, p0, 2).is_none());
        let other = b.clone().with_cell(Point::new(1, 1), Cell::Dead);
        assert!(cache.probe(&other, p0, 3).is_none());
        assert_eq!(cache.misses(), 3);
    }

    #[test]
    fn clear_resets_entries_and_counters() {
        let mut cache = MoveCache::new();
        let b = board();
        cache.store(&b, Player::ALL[0], 1, exact(1));
        let _ = cache.probe(&b, Player::ALL[0], 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn bounds_only_settle_matching_windows() {
        let lower = CacheEntry {
            score: 10,
            bound: Bound::Lower,
            exhaustive: false,
        };
        assert_eq!(lower.usable(0, 10), Some(10));
        assert_eq!(lower.usable(0, 11), None);

        let upper = CacheEntry {
            score: -5,
            bound: Bound::Upper,
            exhaustive: false,
        };
        assert_eq!(upper.usable(-5, 20), Some(-5));
        assert_eq!(upper.usable(-6, 20), None);

        assert_eq!(exact(3).usable(100, 200), Some(3));
    }
}
