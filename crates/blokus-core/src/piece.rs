//! Polyomino pieces and the per-player piece catalog.

use std::fmt;

use crate::error::BoardError;
use crate::player::Player;
use crate::point::{Point, Rotation};

/// Maximum pieces per player; used pieces are tracked in a `u64` mask.
pub const MAX_PIECES: usize = 64;

/// A piece shape as offsets from its anchor cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    cells: Vec<Point>,
}

impl Piece {
    /// Create a piece from its cell offsets.
    pub fn new(cells: Vec<Point>) -> Piece {
        Piece { cells }
    }

    /// A one-cell piece.
    pub fn monomino() -> Piece {
        Piece::new(vec![Point::ORIGIN])
    }

    /// The cell offsets in catalog order.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return `true` if the piece has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the offsets rotated counter-clockwise by `rotation`.
    pub fn rotated(&self, rotation: Rotation) -> Piece {
        Piece {
            cells: self.cells.iter().map(|p| p.rotate(rotation)).collect(),
        }
    }

    /// Absolute cells covered when placed at `anchor` after `rotation`.
    pub fn placed(&self, rotation: Rotation, anchor: Point) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(move |p| anchor + p.rotate(rotation))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, "]")
    }
}

/// The pieces each player held when the snapshot was taken, indexed by piece id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Catalog {
    pieces: [Vec<Piece>; Player::COUNT],
}

impl Catalog {
    /// Build a catalog from exactly four per-player piece lists.
    pub fn new(lists: Vec<Vec<Piece>>) -> Result<Catalog, BoardError> {
        let found = lists.len();
        let pieces: [Vec<Piece>; Player::COUNT] = lists
            .try_into()
            .map_err(|_| BoardError::WrongPlayerCount { found })?;

        for (player, list) in pieces.iter().enumerate() {
            if list.len() > MAX_PIECES {
                return Err(BoardError::TooManyPieces {
                    player,
                    count: list.len(),
                    max: MAX_PIECES,
                });
            }
            if let Some(piece) = list.iter().position(Piece::is_empty) {
                return Err(BoardError::EmptyPiece { player, piece });
            }
        }

        Ok(Catalog { pieces })
    }

    /// A catalog where every player holds the same pieces.
    pub fn uniform(pieces: Vec<Piece>) -> Result<Catalog, BoardError> {
        Catalog::new(vec![pieces; Player::COUNT])
    }

    /// All pieces of `player`, indexed by piece id.
    #[inline]
    pub fn pieces(&self, player: Player) -> &[Piece] {
        &self.pieces[player.index()]
    }

    /// The piece `index` of `player`, if it exists.
    #[inline]
    pub fn piece(&self, player: Player, index: usize) -> Option<&Piece> {
        self.pieces[player.index()].get(index)
    }
}
