use crate::agent::Agent;
use crate::board::{Board, Player, Position};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Why a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEnd {
    /// The loser was boxed in with no legal moves.
    Isolated,
    /// The loser returned no move or an illegal one.
    Forfeit,
    /// The loser overran its per-move time budget.
    Timeout,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    pub winner: Player,
    pub end: GameEnd,
    pub plies: u32,
}

/// Play one game between two agents on `board`, `agents[0]` acting for
/// player 1. Each turn gets a fresh `move_time` budget; overrunning it or
/// returning an illegal move loses on the spot.
pub fn play_game(
    agents: &mut [&mut dyn Agent<Board>; 2],
    mut board: Board,
    move_time: Duration,
) -> GameOutcome {
    let mut plies = 0;
    loop {
        let active = board.to_move();
        let idx = match active {
            Player::One => 0,
            Player::Two => 1,
        };
        let legal = board.legal_moves(active);
        if legal.is_empty() {
            return GameOutcome {
                winner: active.opponent(),
                end: GameEnd::Isolated,
                plies,
            };
        }
        let deadline = Instant::now() + move_time;
        let time_left =
            move || deadline.saturating_duration_since(Instant::now()).as_secs_f64() * 1e3;
        let chosen = agents[idx].get_move(&board, &time_left);
        if time_left() <= 0.0 {
            log::info!("{} ({}) lost on time", agents[idx].name(), active);
            return GameOutcome {
                winner: active.opponent(),
                end: GameEnd::Timeout,
                plies,
            };
        }
        let mv = match chosen {
            Some(mv) if legal.contains(&mv) => mv,
            _ => {
                log::info!("{} ({}) forfeits", agents[idx].name(), active);
                return GameOutcome {
                    winner: active.opponent(),
                    end: GameEnd::Forfeit,
                    plies,
                };
            }
        };
        board = board.apply(mv);
        plies += 1;
    }
}

/// Board with both players placed on random blank cells.
pub fn random_opening(width: u8, height: u8, rng: &mut SmallRng) -> Board {
    let mut board = Board::new(width, height);
    for _ in 0..2 {
        let cells = board.legal_moves(board.to_move());
        // A fresh board always has blank cells for both placements.
        let mv = cells[rng.gen_range(0..cells.len())];
        board = board.apply(mv);
    }
    board
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub first: String,
    pub second: String,
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub timeouts: usize,
    pub forfeits: usize,
}

pub struct MatchConfig {
    pub games: usize,
    pub move_time: Duration,
    pub width: u8,
    pub height: u8,
    pub seed: u64,
    pub progress: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            games: 20,
            move_time: Duration::from_millis(150),
            width: crate::board::grid::DEFAULT_WIDTH,
            height: crate::board::grid::DEFAULT_HEIGHT,
            seed: 1,
            progress: false,
        }
    }
}

/// Play a head-to-head match from seeded random openings, swapping who
/// moves first every game so neither side keeps the first-move edge.
pub fn run_match(
    a: &mut dyn Agent<Board>,
    b: &mut dyn Agent<Board>,
    config: &MatchConfig,
) -> MatchSummary {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut summary = MatchSummary {
        first: a.name().to_string(),
        second: b.name().to_string(),
        games: config.games,
        first_wins: 0,
        second_wins: 0,
        timeouts: 0,
        forfeits: 0,
    };
    let bar = if config.progress {
        let bar = ProgressBar::new(config.games as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} games").expect("valid template"),
        );
        bar
    } else {
        ProgressBar::hidden()
    };
    for game in 0..config.games {
        let board = random_opening(config.width, config.height, &mut rng);
        let a_is_player_one = game % 2 == 0;
        let outcome = if a_is_player_one {
            let mut pair: [&mut dyn Agent<Board>; 2] = [&mut *a, &mut *b];
            play_game(&mut pair, board, config.move_time)
        } else {
            let mut pair: [&mut dyn Agent<Board>; 2] = [&mut *b, &mut *a];
            play_game(&mut pair, board, config.move_time)
        };
        let a_won = (outcome.winner == Player::One) == a_is_player_one;
        if a_won {
            summary.first_wins += 1;
        } else {
            summary.second_wins += 1;
        }
        match outcome.end {
            GameEnd::Timeout => summary.timeouts += 1,
            GameEnd::Forfeit => summary.forfeits += 1,
            GameEnd::Isolated => {}
        }
        log::debug!(
            "game {game}: winner {} after {} plies ({:?})",
            outcome.winner,
            outcome.plies,
            outcome.end
        );
        bar.inc(1);
    }
    bar.finish_and_clear();
    summary
}
