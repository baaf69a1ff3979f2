//! The corner-contact placement rule.

use crate::board::Board;
use crate::player::Player;
use crate::point::Point;

/// Edge neighbors (4-neighborhood).
const EDGES: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
];

/// Diagonal neighbors.
const DIAGONALS: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(-1, 1),
    Point::new(1, -1),
    Point::new(1, 1),
];

/// Check whether `player` may cover `anchor + offset` for every offset in `cells`.
///
/// `cells` are the already-rotated piece offsets. A placement is legal iff:
/// 1. every covered cell is on the board and empty,
/// 2. no covered cell shares an edge with a cell `player` owns,
/// 3. it covers the player's starting corner while that corner is unowned,
///    otherwise at least one covered cell touches an own cell diagonally.
pub fn can_place(board: &Board, cells: &[Point], anchor: Point, player: Player) -> bool {
    let corner = player.starting_corner(board.dimension());
    let mut on_corner = false;
    let mut on_rel_corner = false;

    for &offset in cells {
        let p = anchor + offset;

        if !board.cell(p).is_some_and(|c| c.is_empty()) {
            return false;
        }
        if EDGES.iter().any(|&d| board.is_owned_by(p + d, player)) {
            return false;
        }

        on_corner |= p == corner;
        on_rel_corner |= DIAGONALS.iter().any(|&d| board.is_owned_by(p + d, player));
    }

    let corner_unowned = board.cell(corner).is_some_and(|c| c.owner().is_none());
    if corner_unowned {
        on_corner
    } else {
        on_corner || on_rel_corner
    }
}
