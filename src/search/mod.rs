pub mod alphabeta;
pub mod clock;
pub mod eval;
pub mod minimax;

pub use clock::{Clock, SearchTimeout};

use crate::board::Move;

/// Outcome of one completed search: the move chosen at the root (None when
/// the player to act has no legal moves), the utility backing it, and some
/// accounting for tests and logs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: f64,
    pub nodes: u64,
    pub depth: u32,
}

impl SearchResult {
    pub(crate) fn forfeit(nodes: u64) -> Self {
        SearchResult {
            best_move: None,
            score: f64::NEG_INFINITY,
            nodes,
            depth: 0,
        }
    }
}
