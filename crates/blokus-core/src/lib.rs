//! Core Blokus types: board representation, pieces, move generation, and placement rules.

mod apply;
mod board;
mod cell;
mod error;
pub mod movegen;
pub mod perft;
mod piece;
mod placement;
mod player;
mod point;

pub use board::{Board, PrettyBoard};
pub use cell::{Cell, DEAD_CODE, EMPTY_CODE};
pub use error::{BoardError, CellError, MoveParseError};
pub use movegen::{
    MoveList, can_place, first_legal_move, generate_legal_moves, has_legal_move, is_legal,
};
pub use piece::{Catalog, MAX_PIECES, Piece};
pub use placement::Move;
pub use player::Player;
pub use point::{Point, Rotation};
