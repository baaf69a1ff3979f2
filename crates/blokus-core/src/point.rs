//! Integer grid points and quarter-turn rotations.

use std::fmt;
use std::ops::Add;

/// A counter-clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rotation {
    R0 = 0,
    R90 = 1,
    R180 = 2,
    R270 = 3,
}

impl Rotation {
    /// Total number of rotations.
    pub const COUNT: usize = 4;

    /// All rotations in index order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// Return the number of quarter turns (0..3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rotation from a quarter-turn count, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rotation> {
        match index {
            0 => Some(Rotation::R0),
            1 => Some(Rotation::R90),
            2 => Some(Rotation::R180),
            3 => Some(Rotation::R270),
            _ => None,
        }
    }

    /// Return the rotation one quarter turn further.
    #[inline]
    pub const fn next(self) -> Rotation {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A point (or offset) on the integer grid. Ordered by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point::new(0, 0);

    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Rotate counter-clockwise about the origin.
    ///
    /// | rotation | result      |
    /// |----------|-------------|
    /// | `R0`     | `( x,  y)`  |
    /// | `R90`    | `(-y,  x)`  |
    /// | `R180`   | `(-x, -y)`  |
    /// | `R270`   | `( y, -x)`  |
    #[inline]
    pub const fn rotate(self, rotation: Rotation) -> Point {
        match rotation {
            Rotation::R0 => self,
            Rotation::R90 => Point::new(-self.y, self.x),
            Rotation::R180 => Point::new(-self.x, -self.y),
            Rotation::R270 => Point::new(self.y, -self.x),
        }
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub const fn distance(self, other: Point) -> u32 {
        (other.x - self.x).unsigned_abs() + (other.y - self.y).unsigned_abs()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rotation};

    #[test]
    fn rotate_quarter_turns() {
        let p = Point::new(2, 1);
        assert_eq!(p.rotate(Rotation::R0), Point::new(2, 1));
        assert_eq!(p.rotate(Rotation::R90), Point::new(-1, 2));
        assert_eq!(p.rotate(Rotation::R180), Point::new(-2, -1));
        assert_eq!(p.rotate(Rotation::R270), Point::new(1, -2));
    }

    #[test]
    fn points_order_by_x_then_y() {
        let mut cells = vec![Point::new(1, 0), Point::new(0, 2), Point::new(0, -1)];
        cells.sort_unstable();
        assert_eq!(cells, vec![Point::new(0, -1), Point::new(0, 2), Point::new(1, 0)]);
    }

    #[test]
    fn four_single_steps_is_identity() {
        let p = Point::new(3, -7);
        let mut q = p;
        for _ in 0..4 {
            q = q.rotate(Rotation::R90);
        }
        assert_eq!(q, p);
    }

    #[test]
    fn rotations_compose() {
        let p = Point::new(4, 5);
        assert_eq!(p.rotate(Rotation::R90).rotate(Rotation::R90), p.rotate(Rotation::R180));
        assert_eq!(p.rotate(Rotation::R90).rotate(Rotation::R180), p.rotate(Rotation::R270));
    }

    #[test]
    fn add_translates() {
        assert_eq!(Point::new(1, 2) + Point::new(-3, 4), Point::new(-2, 6));
        assert_eq!(Point::ORIGIN + Point::new(5, 5), Point::new(5, 5));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, -4)), 7);
        assert_eq!(Point::new(2, 2).distance(Point::new(2, 2)), 0);
    }

    #[test]
    fn rotation_index_roundtrip() {
        for r in Rotation::ALL {
            assert_eq!(Rotation::from_index(r.index() as u8), Some(r));
        }
        assert_eq!(Rotation::from_index(4), None);
        assert_eq!(Rotation::R270.next(), Rotation::R0);
    }
}
