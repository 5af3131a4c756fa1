use isobot::agent::{Agent, GreedyAgent, RandomAgent};
use isobot::board::{Board, Player, Position};
use isobot::tournament::{play_game, random_opening, run_match, GameEnd, MatchConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Duration;

#[test]
fn random_opening_places_both_players() {
    let mut rng = SmallRng::seed_from_u64(7);
    let board = random_opening(5, 5, &mut rng);
    assert!(board.location(Player::One).is_some());
    assert!(board.location(Player::Two).is_some());
    assert_ne!(board.location(Player::One), board.location(Player::Two));
    assert_eq!(board.to_move(), Player::One);
}

#[test]
fn game_runs_to_isolation() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = random_opening(5, 5, &mut rng);
    let mut a = GreedyAgent::new();
    let mut b = RandomAgent::new(3);
    let mut pair: [&mut dyn Agent<Board>; 2] = [&mut a, &mut b];
    let outcome = play_game(&mut pair, board, Duration::from_millis(50));
    assert_eq!(outcome.end, GameEnd::Isolated);
    assert!(outcome.plies > 0);
}

#[test]
fn match_tally_adds_up() {
    let mut a = RandomAgent::new(11);
    let mut b = RandomAgent::new(12);
    let config = MatchConfig {
        games: 6,
        move_time: Duration::from_millis(20),
        width: 5,
        height: 5,
        seed: 42,
        progress: false,
    };
    let summary = run_match(&mut a, &mut b, &config);
    assert_eq!(summary.first_wins + summary.second_wins, summary.games);
}

#[test]
fn seeded_matches_are_reproducible() {
    let config = MatchConfig {
        games: 4,
        move_time: Duration::from_millis(20),
        width: 5,
        height: 5,
        seed: 9,
        progress: false,
    };
    let first = {
        let mut a = RandomAgent::new(1);
        let mut b = RandomAgent::new(2);
        run_match(&mut a, &mut b, &config)
    };
    let second = {
        let mut a = RandomAgent::new(1);
        let mut b = RandomAgent::new(2);
        run_match(&mut a, &mut b, &config)
    };
    assert_eq!(first.first_wins, second.first_wins);
    assert_eq!(first.second_wins, second.second_wins);
}
