//! Client session: reads server messages line by line and answers move requests.

use std::fmt;
use std::io::{BufRead, Write};

use blokus_core::{Board, Move, Player};
use blokus_engine::{Decision, score_for_all};
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::error::ProtocolError;
use crate::snapshot::{Message, player_from_wire};

/// One line written back to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A placement, written as `piece rotation x y`.
    Move(Move),
    /// A diagnostic, written with a `DEBUG ` prefix.
    Debug(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Move(mv) => write!(f, "{mv}"),
            Reply::Debug(message) => write!(f, "DEBUG {message}"),
        }
    }
}

/// State remembered across messages.
pub struct Session {
    search: SearchConfig,
    my_number: Option<Player>,
    board: Option<Board>,
}

impl Session {
    pub fn new(search: SearchConfig) -> Self {
        Self {
            search,
            my_number: None,
            board: None,
        }
    }

    /// This agent's player index, once the server has sent it.
    pub fn my_number(&self) -> Option<Player> {
        self.my_number
    }

    /// The most recent board received.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Whether the player to move on the current board is this agent.
    pub fn is_my_turn(&self) -> bool {
        match (&self.board, self.my_number) {
            (Some(board), Some(me)) => board.to_move() == me,
            _ => false,
        }
    }

    /// Apply one message to the session, returning the reply if one is due.
    pub fn handle(&mut self, msg: &Message) -> Result<Option<Reply>, ProtocolError> {
        if let Some(message) = msg.error_text() {
            return Err(ProtocolError::Reported { message });
        }

        if let Some(number) = msg.number {
            let me = player_from_wire("number", number)?;
            info!(player = %me, "assigned player number");
            self.my_number = Some(me);
        }

        if let Some(board) = msg.to_board()? {
            debug!(
                turn = %board.to_move(),
                my_turn = self.my_number == Some(board.to_move()),
                scores = ?score_for_all(&board),
                "board updated\n{}",
                board.pretty()
            );
            self.board = Some(board);
        }

        if !msg.wants_move() {
            return Ok(None);
        }

        let board = self.board.as_ref().ok_or(ProtocolError::NoBoard)?;
        let player = board.to_move();
        if !self.is_my_turn() {
            warn!(%player, me = ?self.my_number, "move requested for another player's turn");
        }

        let decision = blokus_engine::decide(
            board,
            player,
            self.search.time_budget(),
            self.search.max_depth,
        );
        Ok(Some(match decision {
            Decision::Move { mv, source } => {
                info!(%mv, %source, "sending move");
                Reply::Move(mv)
            }
            Decision::NoLegalMoves => {
                info!(%player, "no legal moves");
                Reply::Debug(format!("no legal moves for player {player}"))
            }
        }))
    }

    /// Handle one raw input line. Failures become `DEBUG` replies.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let result = Message::parse(line).and_then(|msg| self.handle(&msg));
        match result {
            Ok(reply) => reply,
            Err(err) => {
                warn!(%err, "rejected message");
                Some(Reply::Debug(format!("Error: {err}")))
            }
        }
    }
}

/// Run the read-eval loop until `input` is exhausted.
///
/// Each reply is written as one line and flushed immediately.
pub fn run<R, W>(session: &mut Session, input: R, mut output: W) -> Result<(), ProtocolError>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(reply) = session.handle_line(&line) {
            writeln!(output, "{reply}")?;
            output.flush()?;
        }
    }
    debug!("input closed");
    Ok(())
}
