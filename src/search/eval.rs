use crate::board::{Player, Position};

/// Heuristic evaluation strategy: board + perspective player to a score.
/// Contract: deterministic, side-effect-free, `-inf` when `player` has lost,
/// `+inf` when it has won, finite otherwise.
pub type ScoreFn<B> = fn(&B, Player) -> f64;

const MOBILITY_WEIGHT: f64 = 1.5;
const CENTER_WEIGHT: f64 = 1.75;
const CHASE_WEIGHT: f64 = 0.7;

fn terminal_score<B: Position>(board: &B, player: Player) -> Option<f64> {
    if board.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if board.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Negative squared Euclidean distance to the board center. Zero before the
/// player's opening placement.
fn center_term<B: Position>(board: &B, player: Player) -> f64 {
    match board.location(player) {
        Some(loc) => {
            let dr = board.height() as f64 / 2.0 - loc.row as f64;
            let dc = board.width() as f64 / 2.0 - loc.col as f64;
            -(dr * dr + dc * dc)
        }
        None => 0.0,
    }
}

/// Negative squared Euclidean distance to the opponent. Zero until both
/// players are placed.
fn chase_term<B: Position>(board: &B, player: Player) -> f64 {
    match (board.location(player), board.location(player.opponent())) {
        (Some(mine), Some(theirs)) => {
            let dr = theirs.row as f64 - mine.row as f64;
            let dc = theirs.col as f64 - mine.col as f64;
            -(dr * dr + dc * dc)
        }
        _ => 0.0,
    }
}

fn mobility_term<B: Position>(board: &B, player: Player) -> f64 {
    board.legal_moves(player).len() as f64
}

/// Stay central and stay close to the opponent, so it can neither trap us in
/// a corner nor wall us off.
pub fn chase_center_score<B: Position>(board: &B, player: Player) -> f64 {
    if let Some(score) = terminal_score(board, player) {
        return score;
    }
    chase_term(board, player) + CENTER_WEIGHT * center_term(board, player)
}

/// Prefer central cells that keep the most follow-up moves open.
pub fn mobility_center_score<B: Position>(board: &B, player: Player) -> f64 {
    if let Some(score) = terminal_score(board, player) {
        return score;
    }
    MOBILITY_WEIGHT * mobility_term(board, player) + center_term(board, player)
}

/// Blend of mobility, centrality, and opponent proximity. Default strategy.
pub fn blended_score<B: Position>(board: &B, player: Player) -> f64 {
    if let Some(score) = terminal_score(board, player) {
        return score;
    }
    MOBILITY_WEIGHT * mobility_term(board, player)
        + CENTER_WEIGHT * center_term(board, player)
        + CHASE_WEIGHT * chase_term(board, player)
}

/// Raw mobility count, the classic baseline.
pub fn open_move_score<B: Position>(board: &B, player: Player) -> f64 {
    if let Some(score) = terminal_score(board, player) {
        return score;
    }
    mobility_term(board, player)
}
