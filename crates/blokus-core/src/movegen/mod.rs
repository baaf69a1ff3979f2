//! Legal move generation.
//!
//! Enumeration order is fixed: piece index ascending, then cell index
//! (`x = i / N`, `y = i % N`), then rotation `R0..R270`. Search relies on
//! this order for deterministic tie-breaking.

mod legality;

use std::ops::ControlFlow;

use crate::board::Board;
use crate::placement::Move;
use crate::player::Player;
use crate::point::{Point, Rotation};

pub use self::legality::can_place;

/// Heap-backed buffer of generated moves in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the player has no legal placement.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// The first move in enumeration order.
    #[inline]
    pub fn first(&self) -> Option<Move> {
        self.moves.first().copied()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Visit every legal move of `player` in enumeration order until `visit` breaks.
fn for_each_legal_move<F>(board: &Board, player: Player, mut visit: F)
where
    F: FnMut(Move) -> ControlFlow<()>,
{
    for (index, piece) in board.remaining_pieces(player) {
        let rotated: [Vec<Point>; Rotation::COUNT] = Rotation::ALL.map(|r| {
            let mut cells = piece.rotated(r).cells().to_vec();
            cells.sort_unstable();
            cells
        });
        // A rotation with the same offsets as an earlier one places identically.
        let distinct: [bool; Rotation::COUNT] =
            std::array::from_fn(|r| !rotated[..r].contains(&rotated[r]));

        for i in 0..board.cell_count() {
            let anchor = board.point_at(i);
            for rotation in Rotation::ALL {
                if distinct[rotation.index()]
                    && can_place(board, &rotated[rotation.index()], anchor, player)
                {
                    let mv = Move::new(index as u8, rotation, anchor);
                    if visit(mv).is_break() {
                        return;
                    }
                }
            }
        }
    }
}

/// Generate all legal moves of `player`.
pub fn generate_legal_moves(board: &Board, player: Player) -> MoveList {
    let mut list = MoveList::new();
    for_each_legal_move(board, player, |mv| {
        list.push(mv);
        ControlFlow::Continue(())
    });
    list
}

/// Return the first legal move of `player` in enumeration order, if any.
pub fn first_legal_move(board: &Board, player: Player) -> Option<Move> {
    let mut first = None;
    for_each_legal_move(board, player, |mv| {
        first = Some(mv);
        ControlFlow::Break(())
    });
    first
}

/// Return `true` if `player` can place any remaining piece.
#[inline]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    first_legal_move(board, player).is_some()
}

/// Check a complete move for `player`: piece exists, is unused, and fits.
pub fn is_legal(board: &Board, mv: Move, player: Player) -> bool {
    if board.is_used(player, mv.piece()) {
        return false;
    }
    match board.catalog().piece(player, mv.piece()) {
        Some(piece) => can_place(board, piece.rotated(mv.rotation()).cells(), mv.anchor(), player),
        None => false,
    }
}
