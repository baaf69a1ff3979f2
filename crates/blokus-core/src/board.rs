//! The board: cell ownership, bonus squares, side to move, and used pieces.

use std::fmt;
use std::sync::Arc;

use crate::cell::Cell;
use crate::error::BoardError;
use crate::piece::{Catalog, Piece};
use crate::player::Player;
use crate::point::Point;

/// Complete position state for one ply.
///
/// Cells are stored column-major by `x`: index `i` is the point
/// `(i / N, i % N)`. Boards are cheap to clone; the catalog is shared.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Side length.
    dimension: usize,
    /// `dimension * dimension` cells.
    cells: Vec<Cell>,
    /// Bonus-square mask, same indexing as `cells`.
    bonus: Vec<bool>,
    /// Which player moves next.
    to_move: Player,
    /// Bit `k` of entry `p` is set once player `p` has placed piece `k`.
    used: [u64; Player::COUNT],
    /// Pieces each player held at the snapshot.
    catalog: Arc<Catalog>,
}

impl Board {
    /// Create an empty board with no bonus squares, player 0 to move.
    pub fn new(dimension: usize, catalog: Arc<Catalog>) -> Result<Board, BoardError> {
        if dimension == 0 {
            return Err(BoardError::ZeroDimension);
        }
        Ok(Board {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
            bonus: vec![false; dimension * dimension],
            to_move: Player::ALL[0],
            used: [0; Player::COUNT],
            catalog,
        })
    }

    /// Create a board from a grid of wire owner codes, read as `grid[x][y]`.
    pub fn from_codes(
        dimension: usize,
        grid: &[Vec<i32>],
        catalog: Arc<Catalog>,
    ) -> Result<Board, BoardError> {
        let mut board = Board::new(dimension, catalog)?;

        if grid.len() != dimension {
            return Err(BoardError::WrongColumnCount {
                expected: dimension,
                found: grid.len(),
            });
        }

        for (x, column) in grid.iter().enumerate() {
            if column.len() != dimension {
                return Err(BoardError::WrongColumnLength {
                    column: x,
                    expected: dimension,
                    found: column.len(),
                });
            }
            for (y, &code) in column.iter().enumerate() {
                let cell = Cell::from_code(code)
                    .map_err(|source| BoardError::InvalidCell { x, y, source })?;
                board.cells[x * dimension + y] = cell;
            }
        }

        Ok(board)
    }

    /// Mark the given points as bonus squares.
    pub fn with_bonus_squares<I>(mut self, points: I) -> Result<Board, BoardError>
    where
        I: IntoIterator<Item = Point>,
    {
        for point in points {
            let idx = self.index_of(point).ok_or(BoardError::BonusOutOfBounds {
                point,
                dimension: self.dimension,
            })?;
            self.bonus[idx] = true;
        }
        Ok(self)
    }

    /// Set the player to move.
    pub fn with_to_move(mut self, player: Player) -> Board {
        self.to_move = player;
        self
    }

    /// Overwrite a single cell. Out-of-bounds points are ignored.
    pub fn with_cell(mut self, point: Point, cell: Cell) -> Board {
        if let Some(idx) = self.index_of(point) {
            self.cells[idx] = cell;
        }
        self
    }

    /// Side length of the board.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The player to move.
    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The shared piece catalog.
    #[inline]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Return `true` if `point` lies on the board.
    #[inline]
    pub fn in_bounds(&self, point: Point) -> bool {
        let n = self.dimension as i32;
        (0..n).contains(&point.x) && (0..n).contains(&point.y)
    }

    /// Cell index of `point`, or `None` if off the board.
    #[inline]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(point.x as usize * self.dimension + point.y as usize)
        } else {
            None
        }
    }

    /// Point for cell index `index` (`x = i / N`, `y = i % N`).
    #[inline]
    pub fn point_at(&self, index: usize) -> Point {
        Point::new((index / self.dimension) as i32, (index % self.dimension) as i32)
    }

    /// The cell at `point`, or `None` if off the board.
    #[inline]
    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.index_of(point).map(|idx| self.cells[idx])
    }

    /// All cells in index order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Return `true` if `point` is a bonus square.
    #[inline]
    pub fn is_bonus(&self, point: Point) -> bool {
        self.index_of(point).is_some_and(|idx| self.bonus[idx])
    }

    /// Return `true` if the cell at `index` is a bonus square.
    #[inline]
    pub fn is_bonus_index(&self, index: usize) -> bool {
        self.bonus[index]
    }

    /// Return `true` if `player` owns the cell at `point`.
    #[inline]
    pub fn is_owned_by(&self, point: Point, player: Player) -> bool {
        self.cell(point).is_some_and(|c| c.is_owned_by(player))
    }

    /// Return `true` if `player` has already placed piece `index`.
    #[inline]
    pub fn is_used(&self, player: Player, index: usize) -> bool {
        index < u64::BITS as usize && self.used[player.index()] & (1u64 << index) != 0
    }

    /// Pieces `player` can still place, with their catalog indices.
    pub fn remaining_pieces(&self, player: Player) -> impl Iterator<Item = (usize, &Piece)> + '_ {
        self.catalog
            .pieces(player)
            .iter()
            .enumerate()
            .filter(move |(idx, _)| !self.is_used(player, *idx))
    }

    /// Number of cells owned by `player`.
    pub fn owned_count(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.is_owned_by(player)).count()
    }

    /// Canonical byte serialization of the position contents.
    ///
    /// Two boards of the same decision share dimension, bonus squares, and
    /// catalog, so the key covers only cells and used-piece masks.
    pub fn canonical_key(&self) -> Box<[u8]> {
        let mut key = Vec::with_capacity(self.cells.len() + 8 * Player::COUNT);
        key.extend(self.cells.iter().map(|cell| match cell {
            Cell::Empty => 0u8,
            Cell::Dead => 1,
            Cell::Owned(player) => 2 + player.index() as u8,
        }));
        for mask in self.used {
            key.extend_from_slice(&mask.to_le_bytes());
        }
        key.into_boxed_slice()
    }

    /// Set a cell by index.
    #[inline]
    pub(crate) fn set_cell(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Record that `player` placed piece `index`.
    #[inline]
    pub(crate) fn mark_used(&mut self, player: Player, index: usize) {
        self.used[player.index()] |= 1u64 << index;
    }

    /// Set the player to move.
    #[inline]
    pub(crate) fn set_to_move(&mut self, player: Player) {
        self.to_move = player;
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("dimension", &self.dimension)
            .field("to_move", &self.to_move)
            .field("used", &self.used)
            .finish_non_exhaustive()
    }
}

/// Wrapper for pretty-printing a board as a grid.
///
/// Rows are `y` (top row `y = 0`), columns are `x`. Empty bonus squares print as `*`.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let n = board.dimension as i32;
        for y in 0..n {
            for x in 0..n {
                let p = Point::new(x, y);
                let c = match board.cell(p) {
                    Some(Cell::Empty) if board.is_bonus(p) => "*".to_string(),
                    Some(cell) => cell.to_string(),
                    None => "?".to_string(),
                };
                if x < n - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            if y < n - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Board;
    use crate::cell::Cell;
    use crate::error::BoardError;
    use crate::piece::{Catalog, Piece};
    use crate::player::Player;
    use crate::point::Point;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::uniform(vec![Piece::monomino()]).unwrap())
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(5, catalog()).unwrap();
        assert_eq!(board.cell_count(), 25);
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.to_move(), Player::ALL[0]);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(Board::new(0, catalog()).unwrap_err(), BoardError::ZeroDimension);
    }

    #[test]
    fn from_codes_reads_x_major() {
        let grid = vec![vec![-1, 1, -1], vec![-1, -1, -1], vec![-2, -1, 3]];
        let board = Board::from_codes(3, &grid, catalog()).unwrap();
        assert_eq!(board.cell(Point::new(0, 1)), Some(Cell::Owned(Player::ALL[1])));
        assert_eq!(board.cell(Point::new(2, 0)), Some(Cell::Dead));
        assert_eq!(board.cell(Point::new(2, 2)), Some(Cell::Owned(Player::ALL[3])));
        assert_eq!(board.cell(Point::new(1, 0)), Some(Cell::Empty));
    }

    #[test]
    fn from_codes_validates_shape() {
        let short = vec![vec![-1, -1], vec![-1]];
        assert!(matches!(
            Board::from_codes(2, &short, catalog()),
            Err(BoardError::WrongColumnLength { column: 1, .. })
        ));
        let narrow = vec![vec![-1, -1]];
        assert!(matches!(
            Board::from_codes(2, &narrow, catalog()),
            Err(BoardError::WrongColumnCount { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn from_codes_reports_bad_cell() {
        let grid = vec![vec![-1, 9], vec![-1, -1]];
        assert!(matches!(
            Board::from_codes(2, &grid, catalog()),
            Err(BoardError::InvalidCell { x: 0, y: 1, .. })
        ));
    }

    #[test]
    fn bonus_squares_must_be_on_board() {
        let board = Board::new(4, catalog()).unwrap();
        let ok = board.clone().with_bonus_squares([Point::new(3, 0)]).unwrap();
        assert!(ok.is_bonus(Point::new(3, 0)));
        assert!(!ok.is_bonus(Point::new(0, 3)));
        assert!(matches!(
            board.with_bonus_squares([Point::new(4, 0)]),
            Err(BoardError::BonusOutOfBounds { .. })
        ));
    }

    #[test]
    fn index_point_roundtrip() {
        let board = Board::new(6, catalog()).unwrap();
        for i in 0..board.cell_count() {
            assert_eq!(board.index_of(board.point_at(i)), Some(i));
        }
        assert_eq!(board.point_at(7), Point::new(1, 1));
        assert_eq!(board.index_of(Point::new(-1, 0)), None);
    }

    #[test]
    fn canonical_key_tracks_cells_and_used_pieces() {
        let board = Board::new(3, catalog()).unwrap();
        let owned = board.clone().with_cell(Point::new(0, 0), Cell::Owned(Player::ALL[0]));
        assert_ne!(board.canonical_key(), owned.canonical_key());

        let mut used = board.clone();
        used.mark_used(Player::ALL[2], 0);
        assert_ne!(board.canonical_key(), used.canonical_key());
        assert_eq!(board.canonical_key(), board.clone().canonical_key());
    }

    #[test]
    fn remaining_pieces_skip_used() {
        let catalog = Arc::new(Catalog::uniform(vec![Piece::monomino(), Piece::monomino()]).unwrap());
        let mut board = Board::new(3, catalog).unwrap();
        let p1 = Player::ALL[1];
        board.mark_used(p1, 0);
        let remaining: Vec<usize> = board.remaining_pieces(p1).map(|(i, _)| i).collect();
        assert_eq!(remaining, vec![1]);
        assert_eq!(board.remaining_pieces(Player::ALL[0]).count(), 2);
    }

    #[test]
    fn pretty_print() {
        let board = Board::new(3, catalog())
            .unwrap()
            .with_bonus_squares([Point::new(1, 1)])
            .unwrap()
            .with_cell(Point::new(2, 0), Cell::Owned(Player::ALL[1]))
            .with_cell(Point::new(0, 2), Cell::Dead);
        assert_eq!(format!("{}", board.pretty()), ". . 1\n. * .\n# . .");
    }
}
