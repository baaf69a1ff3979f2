//! Error types for board construction and move parsing.

use crate::point::Point;

/// Errors from converting a raw owner code into a [`Cell`](crate::cell::Cell).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    /// The code names a player seat that does not exist.
    #[error("invalid cell code {code}: owners are -1 (empty), 0..3, or below -1 (dead)")]
    UnknownOwner {
        /// The offending code.
        code: i32,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The board has no cells.
    #[error("board dimension must be positive")]
    ZeroDimension,
    /// The grid is not `dimension` columns wide.
    #[error("expected {expected} grid columns, found {found}")]
    WrongColumnCount {
        /// Declared dimension.
        expected: usize,
        /// Number of columns supplied.
        found: usize,
    },
    /// A grid column is not `dimension` cells long.
    #[error("grid column {column} has {found} cells, expected {expected}")]
    WrongColumnLength {
        /// Zero-based column (x) index.
        column: usize,
        /// Declared dimension.
        expected: usize,
        /// Number of cells supplied.
        found: usize,
    },
    /// A grid cell holds an unrecognized owner code.
    #[error("cell ({x}, {y}): {source}")]
    InvalidCell {
        x: usize,
        y: usize,
        /// The underlying cell error.
        source: CellError,
    },
    /// A bonus square lies outside the board.
    #[error("bonus square {point} is outside a {dimension}x{dimension} board")]
    BonusOutOfBounds {
        point: Point,
        dimension: usize,
    },
    /// The piece catalog does not describe exactly four players.
    #[error("expected piece lists for 4 players, found {found}")]
    WrongPlayerCount {
        /// Number of piece lists supplied.
        found: usize,
    },
    /// A player holds more pieces than the used-piece mask can track.
    #[error("player {player} has {count} pieces, at most {max} are supported")]
    TooManyPieces {
        player: usize,
        count: usize,
        max: usize,
    },
    /// A piece has no cells.
    #[error("piece {piece} of player {player} is empty")]
    EmptyPiece {
        player: usize,
        piece: usize,
    },
}

/// Errors from parsing a move in `"piece rotation x y"` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// The string does not have exactly four whitespace-separated fields.
    #[error("expected 4 move fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// A field is not a valid integer of the expected range.
    #[error("invalid {field}: \"{value}\"")]
    InvalidField {
        /// Which field failed.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },
}
