use crate::board::{Player, Position};
use crate::search::eval::ScoreFn;
use crate::search::{Clock, SearchResult, SearchTimeout};

/// Depth-limited minimax with alpha-beta pruning, plus the iterative
/// deepening driver that makes it an anytime search under a clock.
///
/// For a fixed move-enumeration order the chosen root move is identical to
/// plain minimax at the same depth; pruning only cuts the node count.
pub struct AlphaBetaSearcher<'a, B: Position> {
    score: ScoreFn<B>,
    clock: Clock<'a>,
    pub nodes: u64,
    // Set whenever a cutoff happens because depth ran out rather than the
    // game ending; cleared per iteration. If a whole iteration completes
    // without setting it, the tree is exhausted and deeper search is moot.
    hit_depth_limit: bool,
}

impl<'a, B: Position> AlphaBetaSearcher<'a, B> {
    pub fn new(score: ScoreFn<B>, clock: Clock<'a>) -> Self {
        AlphaBetaSearcher {
            score,
            clock,
            nodes: 0,
            hit_depth_limit: false,
        }
    }

    /// Fixed-depth search. The root examines every immediate child (each
    /// subtree needs at least one visited leaf before its value can be
    /// compared), carrying alpha as a running best without pruning; the
    /// first move achieving the maximum wins, in enumeration order.
    pub fn search(&mut self, board: &B, depth: u32) -> Result<SearchResult, SearchTimeout> {
        self.clock.check()?;
        let root_player = board.to_move();
        let moves = board.legal_moves(root_player);
        if moves.is_empty() {
            return Ok(SearchResult::forfeit(self.nodes));
        }
        let mut alpha = f64::NEG_INFINITY;
        let mut best_move = None;
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let value = self.min_value(
                &board.apply(mv),
                root_player,
                depth.saturating_sub(1),
                alpha,
                f64::INFINITY,
            )?;
            if best_move.is_none() || value > best {
                best = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(best);
        }
        Ok(SearchResult {
            best_move,
            score: best,
            nodes: self.nodes,
            depth,
        })
    }

    /// Iterative deepening: re-search at depth 1, 2, 3, ... until the clock
    /// runs out or the tree is exhausted, keeping the move from the last
    /// fully-completed depth.
    pub fn search_iterative(&mut self, board: &B) -> SearchResult {
        let mut best: Option<SearchResult> = None;
        let mut depth = 1;
        loop {
            self.hit_depth_limit = false;
            match self.search(board, depth) {
                Ok(result) => {
                    log::debug!(
                        "depth {depth} complete: move {:?} score {} nodes {}",
                        result.best_move,
                        result.score,
                        result.nodes
                    );
                    if result.best_move.is_none() {
                        return result;
                    }
                    let exhausted = !self.hit_depth_limit;
                    best = Some(result);
                    if exhausted {
                        log::debug!("tree exhausted at depth {depth}");
                        break;
                    }
                    depth += 1;
                }
                Err(SearchTimeout) => break,
            }
        }
        best.unwrap_or_else(|| SearchResult::forfeit(self.nodes))
    }

    fn max_value(
        &mut self,
        board: &B,
        root_player: Player,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> Result<f64, SearchTimeout> {
        self.clock.check()?;
        self.nodes += 1;
        let moves = board.legal_moves(board.to_move());
        if depth == 0 || moves.is_empty() {
            if depth == 0 && !moves.is_empty() {
                self.hit_depth_limit = true;
            }
            return Ok((self.score)(board, root_player));
        }
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            best = best.max(self.min_value(&board.apply(mv), root_player, depth - 1, alpha, beta)?);
            if best >= beta {
                return Ok(best);
            }
            alpha = alpha.max(best);
        }
        Ok(best)
    }

    fn min_value(
        &mut self,
        board: &B,
        root_player: Player,
        depth: u32,
        alpha: f64,
        mut beta: f64,
    ) -> Result<f64, SearchTimeout> {
        self.clock.check()?;
        self.nodes += 1;
        let moves = board.legal_moves(board.to_move());
        if depth == 0 || moves.is_empty() {
            if depth == 0 && !moves.is_empty() {
                self.hit_depth_limit = true;
            }
            return Ok((self.score)(board, root_player));
        }
        let mut best = f64::INFINITY;
        for mv in moves {
            best = best.min(self.max_value(&board.apply(mv), root_player, depth - 1, alpha, beta)?);
            if best <= alpha {
                return Ok(best);
            }
            beta = beta.min(best);
        }
        Ok(best)
    }
}
