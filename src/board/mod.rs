pub mod grid;

pub use grid::Board;

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players. The search only ever needs identity and
/// opposition; which player moved first is the board's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// A destination cell. "No legal move" (forfeit) is `Option<Move>::None`
/// wherever a search or agent reports its choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self {
        Move { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The surface the search engine consumes. Implementations must be pure:
/// `apply` returns a new independent state, `legal_moves` yields a stable
/// order for identical inputs, and nothing here mutates `self`.
pub trait Position: Clone {
    /// Legal moves for `player` at this state, in a deterministic order.
    /// Order matters: search tie-breaks pick the first best move seen.
    fn legal_moves(&self, player: Player) -> Vec<Move>;

    /// Apply a move for the player to act, returning the successor state.
    fn apply(&self, mv: Move) -> Self;

    /// The player whose turn it is.
    fn to_move(&self) -> Player;

    /// True if `player` is to move and has no legal moves.
    fn is_loser(&self, player: Player) -> bool;

    /// True if `player`'s opponent is to move and has no legal moves.
    fn is_winner(&self, player: Player) -> bool;

    /// Current cell of `player`, or `None` before its opening placement.
    fn location(&self, player: Player) -> Option<Move>;

    fn width(&self) -> u8;
    fn height(&self) -> u8;
}
