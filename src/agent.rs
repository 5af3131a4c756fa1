use crate::board::{Move, Position};
use crate::search::alphabeta::AlphaBetaSearcher;
use crate::search::clock::TIMER_THRESHOLD_MS;
use crate::search::eval::{blended_score, open_move_score, ScoreFn};
use crate::search::minimax::MinimaxSearcher;
use crate::search::Clock;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A move-picking strategy the tournament harness can drive. `time_left`
/// reports milliseconds remaining in the turn, decreasing as time elapses;
/// returning `None` forfeits.
pub trait Agent<B: Position> {
    fn get_move(&mut self, board: &B, time_left: &dyn Fn() -> f64) -> Option<Move>;

    fn name(&self) -> &str;
}

/// Uniform-random legal move. Baseline opponent.
pub struct RandomAgent {
    name: String,
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<B: Position> Agent<B> for RandomAgent {
    fn get_move(&mut self, board: &B, _time_left: &dyn Fn() -> f64) -> Option<Move> {
        let moves = board.legal_moves(board.to_move());
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One-ply lookahead on a heuristic. Baseline opponent.
pub struct GreedyAgent<B: Position> {
    name: String,
    score: ScoreFn<B>,
}

impl<B: Position> GreedyAgent<B> {
    pub fn new() -> Self {
        GreedyAgent {
            name: "Greedy".to_string(),
            score: open_move_score,
        }
    }
}

impl<B: Position> Default for GreedyAgent<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Position> Agent<B> for GreedyAgent<B> {
    fn get_move(&mut self, board: &B, _time_left: &dyn Fn() -> f64) -> Option<Move> {
        let player = board.to_move();
        let mut best: Option<(Move, f64)> = None;
        for mv in board.legal_moves(player) {
            let value = (self.score)(&board.apply(mv), player);
            if best.map_or(true, |(_, b)| value > b) {
                best = Some((mv, value));
            }
        }
        best.map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fixed-depth minimax without pruning. Returns `None` if the search times
/// out before its single depth completes.
pub struct MinimaxAgent<B: Position> {
    name: String,
    depth: u32,
    score: ScoreFn<B>,
    threshold_ms: f64,
}

impl<B: Position> MinimaxAgent<B> {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent {
            name: format!("Minimax(depth={depth})"),
            depth,
            score: blended_score,
            threshold_ms: TIMER_THRESHOLD_MS,
        }
    }

    pub fn with_score(depth: u32, score: ScoreFn<B>) -> Self {
        MinimaxAgent {
            score,
            ..Self::new(depth)
        }
    }
}

impl<B: Position> Agent<B> for MinimaxAgent<B> {
    fn get_move(&mut self, board: &B, time_left: &dyn Fn() -> f64) -> Option<Move> {
        let clock = Clock::with_threshold(time_left, self.threshold_ms);
        let mut searcher = MinimaxSearcher::new(self.score, clock);
        match searcher.search(board, self.depth) {
            Ok(result) => result.best_move,
            Err(_) => None,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Iterative-deepening alpha-beta under the caller's clock. The top-level
/// entry point of the engine: always returns within the time budget, with
/// the move from the deepest fully-completed iteration.
pub struct AlphaBetaAgent<B: Position> {
    name: String,
    score: ScoreFn<B>,
    threshold_ms: f64,
}

impl<B: Position> AlphaBetaAgent<B> {
    pub fn new() -> Self {
        AlphaBetaAgent {
            name: "AlphaBeta".to_string(),
            score: blended_score,
            threshold_ms: TIMER_THRESHOLD_MS,
        }
    }

    pub fn with_score(score: ScoreFn<B>) -> Self {
        AlphaBetaAgent {
            score,
            ..Self::new()
        }
    }
}

impl<B: Position> Default for AlphaBetaAgent<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Position> Agent<B> for AlphaBetaAgent<B> {
    fn get_move(&mut self, board: &B, time_left: &dyn Fn() -> f64) -> Option<Move> {
        let clock = Clock::with_threshold(time_left, self.threshold_ms);
        let mut searcher = AlphaBetaSearcher::new(self.score, clock);
        searcher.search_iterative(board).best_move
    }

    fn name(&self) -> &str {
        &self.name
    }
}
