//! Static evaluation of a position from one player's point of view.
//!
//! Scores are integers counted in half points so that search values stay
//! exact: an empty cell is worth half a point, an owned cell one point.

use blokus_core::{Board, Cell, Player};

/// Evaluation in half points.
pub type Score = i32;

/// Value of an empty cell (0.5 points).
pub const EMPTY_WEIGHT: Score = 1;

/// Value of a cell owned by the evaluating player (1 point).
pub const OWN_WEIGHT: Score = 2;

/// Value of a cell owned by anyone else (-1 point).
pub const OPPONENT_WEIGHT: Score = -2;

/// Multiplier applied on bonus squares.
pub const BONUS_MULTIPLIER: Score = 3;

/// Score `board` for `player`.
///
/// | Cell              | Points |
/// |-------------------|--------|
/// | Empty             | +0.5   |
/// | Owned by `player` | +1     |
/// | Owned by another  | -1     |
/// | Dead              | 0      |
///
/// Each contribution is tripled on a bonus square.
pub fn evaluate(board: &Board, player: Player) -> Score {
    board
        .cells()
        .iter()
        .enumerate()
        .map(|(idx, &cell)| {
            let base = match cell {
                Cell::Empty => EMPTY_WEIGHT,
                Cell::Dead => 0,
                Cell::Owned(owner) if owner == player => OWN_WEIGHT,
                Cell::Owned(_) => OPPONENT_WEIGHT,
            };
            if board.is_bonus_index(idx) {
                base * BONUS_MULTIPLIER
            } else {
                base
            }
        })
        .sum()
}

/// Evaluate `board` for every player, in seat order.
pub fn score_for_all(board: &Board) -> [Score; Player::COUNT] {
    Player::ALL.map(|p| evaluate(board, p))
}

/// Convert a half-point score to points.
#[inline]
pub fn score_to_points(score: Score) -> f64 {
    f64::from(score) / 2.0
}
