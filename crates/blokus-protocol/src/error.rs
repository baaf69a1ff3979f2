//! Protocol and configuration errors.

use std::path::PathBuf;

use blokus_core::BoardError;

/// Errors that can occur while handling a server message.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The line is not a JSON object of the expected shape.
    #[error("malformed message: {source}")]
    Json {
        /// The underlying parse error.
        #[from]
        source: serde_json::Error,
    },

    /// The server flagged the snapshot as not actionable.
    #[error("{message}")]
    Reported {
        /// The server's error text.
        message: String,
    },

    /// A field required alongside another one is absent.
    #[error("message is missing `{field}`")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },

    /// A player index is outside `0..4`.
    #[error("invalid player index {index} in `{field}`")]
    InvalidPlayer {
        /// Field the index came from.
        field: &'static str,
        /// The offending index.
        index: i64,
    },

    /// A move was requested before any board was received.
    #[error("move requested before any board was received")]
    NoBoard,

    /// The snapshot does not describe a valid board.
    #[error("invalid board: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// An I/O error occurred on the input or output channel.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

/// Errors that can occur while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    #[error("time_budget_secs must be positive and finite, got {value}")]
    InvalidBudget { value: f64 },

    #[error("time_budget_secs {value} is too large")]
    BudgetTooLarge { value: f64 },

    #[error("max_depth must be at least 1")]
    ZeroDepth,
}
