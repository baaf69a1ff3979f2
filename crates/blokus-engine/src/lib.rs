//! Evaluation and search for the Blokus agent.

pub mod anytime;
pub mod eval;
pub mod search;

pub use anytime::{Decision, MoveSource, ResultSlot, decide};
pub use eval::{Score, evaluate, score_for_all, score_to_points};
pub use search::control::SearchControl;
pub use search::negamax::{INF, minimax, minimax_root};
pub use search::{SearchResult, Searcher};
