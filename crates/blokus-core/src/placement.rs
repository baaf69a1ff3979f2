//! Piece placements (moves).

use std::fmt;
use std::str::FromStr;

use crate::error::MoveParseError;
use crate::point::{Point, Rotation};

/// A placement: rotate piece `piece` by `rotation` and pin its offset origin to `anchor`.
///
/// The wire form is `"piece rotation x y"`, e.g. `"3 1 10 4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: u8,
    rotation: Rotation,
    anchor: Point,
}

impl Move {
    /// Create a placement.
    pub const fn new(piece: u8, rotation: Rotation, anchor: Point) -> Move {
        Move {
            piece,
            rotation,
            anchor,
        }
    }

    /// Index of the piece in the mover's catalog.
    #[inline]
    pub const fn piece(self) -> usize {
        self.piece as usize
    }

    /// Rotation applied before placing.
    #[inline]
    pub const fn rotation(self) -> Rotation {
        self.rotation
    }

    /// Board cell the offset origin lands on.
    #[inline]
    pub const fn anchor(self) -> Point {
        self.anchor
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.piece, self.rotation, self.anchor.x, self.anchor.y
        )
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(MoveParseError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let invalid = |field: &'static str, value: &str| MoveParseError::InvalidField {
            field,
            value: value.to_string(),
        };

        let piece: u8 = fields[0].parse().map_err(|_| invalid("piece", fields[0]))?;
        let rotation = fields[1]
            .parse::<u8>()
            .ok()
            .and_then(Rotation::from_index)
            .ok_or_else(|| invalid("rotation", fields[1]))?;
        let x: i32 = fields[2].parse().map_err(|_| invalid("x", fields[2]))?;
        let y: i32 = fields[3].parse().map_err(|_| invalid("y", fields[3]))?;

        Ok(Move::new(piece, rotation, Point::new(x, y)))
    }
}
