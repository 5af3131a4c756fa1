use anyhow::Result;
use clap::{Parser, Subcommand};
use isobot::agent::{Agent, AlphaBetaAgent, GreedyAgent, MinimaxAgent, RandomAgent};
use isobot::board::{Board, Position};
use isobot::tournament::{self, MatchConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::Write;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "isobot", version, about = "Isolation engine: alpha-beta search with iterative deepening", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a single game and print each position
    Play {
        /// First player: random|greedy|minimax|alphabeta
        #[arg(long, default_value = "alphabeta")]
        first: String,

        /// Second player: random|greedy|minimax|alphabeta
        #[arg(long, default_value = "greedy")]
        second: String,

        /// Movetime per move in milliseconds
        #[arg(long, default_value_t = 150)]
        movetime: u64,

        /// Board width in cells
        #[arg(long, default_value_t = 7)]
        width: u8,

        /// Board height in cells
        #[arg(long, default_value_t = 7)]
        height: u8,

        /// Random seed for the opening placements
        #[arg(long, default_value_t = 1u64)]
        seed: u64,
    },
    /// Play a head-to-head match and summarize the results
    Match {
        /// First player: random|greedy|minimax|alphabeta
        #[arg(long, default_value = "alphabeta")]
        first: String,

        /// Second player: random|greedy|minimax|alphabeta
        #[arg(long, default_value = "minimax")]
        second: String,

        /// Number of games to play
        #[arg(long, default_value_t = 20)]
        games: usize,

        /// Movetime per move in milliseconds
        #[arg(long, default_value_t = 150)]
        movetime: u64,

        /// Board width in cells
        #[arg(long, default_value_t = 7)]
        width: u8,

        /// Board height in cells
        #[arg(long, default_value_t = 7)]
        height: u8,

        /// Random seed for reproducible openings
        #[arg(long, default_value_t = 1u64)]
        seed: u64,

        /// Optional: write summary JSON to this path
        #[arg(long)]
        json_out: Option<String>,
    },
}

fn parse_agent(name: &str) -> Result<Box<dyn Agent<Board>>> {
    match name.to_lowercase().as_str() {
        "random" => Ok(Box::new(RandomAgent::new(0))),
        "greedy" => Ok(Box::new(GreedyAgent::new())),
        "minimax" => Ok(Box::new(MinimaxAgent::new(3))),
        "alphabeta" => Ok(Box::new(AlphaBetaAgent::new())),
        _ => anyhow::bail!("unknown agent '{name}': use random|greedy|minimax|alphabeta"),
    }
}

fn run_play(
    first: &str,
    second: &str,
    movetime: u64,
    width: u8,
    height: u8,
    seed: u64,
) -> Result<()> {
    let mut a = parse_agent(first)?;
    let mut b = parse_agent(second)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = tournament::random_opening(width, height, &mut rng);
    let move_time = Duration::from_millis(movetime);
    println!("{} (1) vs {} (2)\n{board}", a.name(), b.name());

    // Step through the game a move at a time so every position prints.
    let mut plies = 0u32;
    loop {
        let active = board.to_move();
        let agent: &mut dyn Agent<Board> = match active {
            isobot::board::Player::One => a.as_mut(),
            isobot::board::Player::Two => b.as_mut(),
        };
        let legal = board.legal_moves(active);
        if legal.is_empty() {
            println!("{active} is isolated; {} wins after {plies} plies", active.opponent());
            return Ok(());
        }
        let deadline = std::time::Instant::now() + move_time;
        let time_left = move || {
            deadline
                .saturating_duration_since(std::time::Instant::now())
                .as_secs_f64()
                * 1e3
        };
        match agent.get_move(&board, &time_left) {
            Some(mv) if legal.contains(&mv) => {
                println!("{active} plays {mv}");
                board = board.apply(mv);
                plies += 1;
                println!("{board}");
            }
            _ => {
                println!("{active} forfeits; {} wins after {plies} plies", active.opponent());
                return Ok(());
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_match(
    first: &str,
    second: &str,
    games: usize,
    movetime: u64,
    width: u8,
    height: u8,
    seed: u64,
    json_out: Option<String>,
) -> Result<()> {
    let mut a = parse_agent(first)?;
    let mut b = parse_agent(second)?;
    let config = MatchConfig {
        games,
        move_time: Duration::from_millis(movetime),
        width,
        height,
        seed,
        progress: true,
    };
    let summary = tournament::run_match(a.as_mut(), b.as_mut(), &config);
    println!(
        "{} {} - {} {} ({} games, {} timeouts, {} forfeits)",
        summary.first,
        summary.first_wins,
        summary.second_wins,
        summary.second,
        summary.games,
        summary.timeouts,
        summary.forfeits
    );
    if let Some(path) = json_out {
        let mut file = File::create(&path)?;
        writeln!(file, "{}", serde_json::to_string_pretty(&summary)?)?;
        println!("wrote summary to {path}");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    match args.command {
        Command::Play {
            first,
            second,
            movetime,
            width,
            height,
            seed,
        } => run_play(&first, &second, movetime, width, height, seed),
        Command::Match {
            first,
            second,
            games,
            movetime,
            width,
            height,
            seed,
            json_out,
        } => run_match(
            &first, &second, games, movetime, width, height, seed, json_out,
        ),
    }
}
