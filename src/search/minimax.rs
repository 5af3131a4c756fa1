use crate::board::{Player, Position};
use crate::search::eval::ScoreFn;
use crate::search::{Clock, SearchResult, SearchTimeout};

/// Fixed-depth minimax without pruning. Slower than alpha-beta but simple
/// enough to serve as the correctness reference it is tested against.
pub struct MinimaxSearcher<'a, B: Position> {
    score: ScoreFn<B>,
    clock: Clock<'a>,
    pub nodes: u64,
}

impl<'a, B: Position> MinimaxSearcher<'a, B> {
    pub fn new(score: ScoreFn<B>, clock: Clock<'a>) -> Self {
        MinimaxSearcher {
            score,
            clock,
            nodes: 0,
        }
    }

    /// Root wrapper: evaluates every root move with one min-layer call and
    /// picks the first move achieving the maximum, in enumeration order.
    pub fn search(&mut self, board: &B, depth: u32) -> Result<SearchResult, SearchTimeout> {
        self.clock.check()?;
        let root_player = board.to_move();
        let moves = board.legal_moves(root_player);
        if moves.is_empty() {
            return Ok(SearchResult::forfeit(self.nodes));
        }
        let mut best_move = None;
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let value = self.min_value(&board.apply(mv), root_player, depth.saturating_sub(1))?;
            if best_move.is_none() || value > best {
                best = value;
                best_move = Some(mv);
            }
        }
        Ok(SearchResult {
            best_move,
            score: best,
            nodes: self.nodes,
            depth,
        })
    }

    fn max_value(&mut self, board: &B, root_player: Player, depth: u32) -> Result<f64, SearchTimeout> {
        self.clock.check()?;
        self.nodes += 1;
        let moves = board.legal_moves(board.to_move());
        if depth == 0 || moves.is_empty() {
            return Ok((self.score)(board, root_player));
        }
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            best = best.max(self.min_value(&board.apply(mv), root_player, depth - 1)?);
        }
        Ok(best)
    }

    fn min_value(&mut self, board: &B, root_player: Player, depth: u32) -> Result<f64, SearchTimeout> {
        self.clock.check()?;
        self.nodes += 1;
        let moves = board.legal_moves(board.to_move());
        if depth == 0 || moves.is_empty() {
            return Ok((self.score)(board, root_player));
        }
        let mut best = f64::INFINITY;
        for mv in moves {
            best = best.min(self.max_value(&board.apply(mv), root_player, depth - 1)?);
        }
        Ok(best)
    }
}
