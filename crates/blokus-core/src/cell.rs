//! Board cell states.

use std::fmt;

use crate::error::CellError;
use crate::player::Player;

/// Wire code for an empty cell.
pub const EMPTY_CODE: i32 = -1;

/// Wire code written for a dead cell. Any code below `-1` reads as dead.
pub const DEAD_CODE: i32 = -2;

/// The content of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Permanently unplayable.
    Dead,
    Owned(Player),
}

impl Cell {
    /// Decode a wire owner code.
    pub fn from_code(code: i32) -> Result<Cell, CellError> {
        match code {
            EMPTY_CODE => Ok(Cell::Empty),
            c if c < EMPTY_CODE => Ok(Cell::Dead),
            c => u8::try_from(c)
                .ok()
                .and_then(Player::from_index)
                .map(Cell::Owned)
                .ok_or(CellError::UnknownOwner { code }),
        }
    }

    /// Encode as a wire owner code.
    pub const fn code(self) -> i32 {
        match self {
            Cell::Empty => EMPTY_CODE,
            Cell::Dead => DEAD_CODE,
            Cell::Owned(player) => player.index() as i32,
        }
    }

    /// Return `true` if nothing occupies the cell.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Return the owner, if any.
    #[inline]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Owned(player) => Some(player),
            _ => None,
        }
    }

    /// Return `true` if `player` owns the cell.
    #[inline]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Owned(player)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Dead => write!(f, "#"),
            Cell::Owned(player) => write!(f, "{player}"),
        }
    }
}
