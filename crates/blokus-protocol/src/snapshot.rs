//! Wire types for server messages and their conversion into a [`Board`].

use std::sync::Arc;

use blokus_core::{Board, Catalog, Piece, Player, Point};
use serde::Deserialize;

use crate::error::ProtocolError;

/// A point as it appears on the wire, `{"x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WirePoint {
    pub x: i32,
    pub y: i32,
}

impl From<WirePoint> for Point {
    fn from(p: WirePoint) -> Point {
        Point::new(p.x, p.y)
    }
}

/// The `board` object of a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WireBoard {
    pub dimension: usize,
    /// Owner codes read as `grid[x][y]`.
    pub grid: Vec<Vec<i32>>,
    #[serde(default)]
    pub bonus_squares: Vec<[i32; 2]>,
}

/// One line of server input. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    /// This agent's own player index.
    #[serde(default, alias = "myNumber")]
    pub number: Option<i64>,
    #[serde(default)]
    pub board: Option<WireBoard>,
    /// Player to move next.
    #[serde(default)]
    pub turn: Option<i64>,
    /// Remaining pieces per player, each a list of cell offsets.
    #[serde(default, alias = "allBlocks")]
    pub blocks: Option<Vec<Vec<Vec<WirePoint>>>>,
    /// Present when the snapshot is not actionable.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    /// `1` when a move response is required.
    #[serde(default, rename = "move")]
    pub move_request: Option<i64>,
}

impl Message {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Message, ProtocolError> {
        Ok(serde_json::from_str(line)?)
    }

    /// Whether this message asks for a move.
    pub fn wants_move(&self) -> bool {
        self.move_request == Some(1)
    }

    /// The server's error text, if the message carries one.
    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Build the board this message describes, or `None` if it has no `board`.
    ///
    /// A message with a `board` must also carry `turn` and `blocks`.
    pub fn to_board(&self) -> Result<Option<Board>, ProtocolError> {
        let Some(wire) = &self.board else {
            return Ok(None);
        };
        let turn = self.turn.ok_or(ProtocolError::MissingField { field: "turn" })?;
        let turn = player_from_wire("turn", turn)?;
        let blocks = self
            .blocks
            .as_ref()
            .ok_or(ProtocolError::MissingField { field: "blocks" })?;

        let lists = blocks
            .iter()
            .map(|pieces| {
                pieces
                    .iter()
                    .map(|cells| Piece::new(cells.iter().copied().map(Point::from).collect()))
                    .collect()
            })
            .collect();
        let catalog = Arc::new(Catalog::new(lists)?);

        let board = Board::from_codes(wire.dimension, &wire.grid, catalog)?
            .with_bonus_squares(wire.bonus_squares.iter().map(|&[x, y]| Point::new(x, y)))?
            .with_to_move(turn);
        Ok(Some(board))
    }
}

/// Convert a wire player index, reporting `field` on failure.
pub fn player_from_wire(field: &'static str, index: i64) -> Result<Player, ProtocolError> {
    u8::try_from(index)
        .ok()
        .and_then(Player::from_index)
        .ok_or(ProtocolError::InvalidPlayer { field, index })
}
