//! Player seats around the board.

use std::fmt;

use crate::point::Point;

/// One of the four seats, numbered 0..3 in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Player(u8);

impl Player {
    /// Total number of players.
    pub const COUNT: usize = 4;

    /// All players in turn order.
    pub const ALL: [Player; 4] = [Player(0), Player(1), Player(2), Player(3)];

    /// Create a player from a seat index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Player> {
        if (index as usize) < Self::COUNT {
            Some(Player(index))
        } else {
            None
        }
    }

    /// Return the seat index (0..3).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the player who moves after this one.
    #[inline]
    pub const fn next(self) -> Player {
        Player((self.0 + 1) % 4)
    }

    /// Return the player seated immediately before this one.
    ///
    /// During search this player plays on the same side as `self`.
    #[inline]
    pub const fn teammate(self) -> Player {
        Player((self.0 + 3) % 4)
    }

    /// The board corner this player's first piece must cover.
    ///
    /// Seats go around the board: `(0, 0)`, `(N-1, 0)`, `(N-1, N-1)`, `(0, N-1)`.
    pub const fn starting_corner(self, dimension: usize) -> Point {
        let far = dimension as i32 - 1;
        match self.0 {
            0 => Point::new(0, 0),
            1 => Point::new(far, 0),
            2 => Point::new(far, far),
            _ => Point::new(0, far),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
