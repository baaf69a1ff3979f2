//! Server protocol for the Blokus agent: message parsing, configuration, and the client loop.

pub mod client;
pub mod config;
pub mod error;
pub mod snapshot;

pub use client::{Reply, Session, run};
pub use config::{CONFIG_ENV_VAR, Config, DEFAULT_CONFIG_PATH, SearchConfig};
pub use error::{ConfigError, ProtocolError};
pub use snapshot::{Message, WireBoard, WirePoint};
