use isobot::board::{Board, Move, Player, Position};
use isobot::search::alphabeta::AlphaBetaSearcher;
use isobot::search::eval::blended_score;
use isobot::search::minimax::MinimaxSearcher;
use isobot::search::Clock;

fn sample_boards() -> Vec<Board> {
    vec![
        Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2)),
        Board::with_positions(4, 4, Move::new(0, 0), Move::new(3, 3)),
        Board::with_positions(5, 5, Move::new(2, 2), Move::new(0, 0)),
        Board::with_positions(5, 5, Move::new(1, 1), Move::new(3, 3))
            .blocking(&[Move::new(2, 3), Move::new(3, 2), Move::new(0, 2)]),
        Board::with_positions(6, 6, Move::new(2, 3), Move::new(4, 1)),
    ]
}

#[test]
fn agrees_with_minimax_at_every_depth() {
    for board in sample_boards() {
        for depth in 1..=4 {
            let mut plain = MinimaxSearcher::new(blended_score, Clock::unlimited());
            let mut pruned = AlphaBetaSearcher::new(blended_score, Clock::unlimited());
            let reference = plain.search(&board, depth).expect("unlimited clock");
            let result = pruned.search(&board, depth).expect("unlimited clock");
            assert_eq!(
                result.best_move, reference.best_move,
                "move mismatch at depth {depth}"
            );
            assert_eq!(
                result.score, reference.score,
                "root value mismatch at depth {depth}"
            );
        }
    }
}

#[test]
fn never_visits_more_nodes_than_minimax() {
    for board in sample_boards() {
        for depth in 1..=4 {
            let mut plain = MinimaxSearcher::new(blended_score, Clock::unlimited());
            let mut pruned = AlphaBetaSearcher::new(blended_score, Clock::unlimited());
            plain.search(&board, depth).expect("unlimited clock");
            pruned.search(&board, depth).expect("unlimited clock");
            assert!(
                pruned.nodes <= plain.nodes,
                "pruning regressed at depth {depth}: {} > {}",
                pruned.nodes,
                plain.nodes
            );
        }
    }
}

#[test]
fn prunes_strictly_on_a_branchy_position() {
    let board = Board::with_positions(7, 7, Move::new(3, 3), Move::new(1, 1));
    let mut plain = MinimaxSearcher::new(blended_score, Clock::unlimited());
    let mut pruned = AlphaBetaSearcher::new(blended_score, Clock::unlimited());
    plain.search(&board, 3).expect("unlimited clock");
    pruned.search(&board, 3).expect("unlimited clock");
    assert!(
        pruned.nodes < plain.nodes,
        "expected strict pruning: {} vs {}",
        pruned.nodes,
        plain.nodes
    );
}

#[test]
fn forced_move_is_returned() {
    let board = Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2))
        .blocking(&[Move::new(2, 1)]);
    assert_eq!(board.legal_moves(Player::One), vec![Move::new(1, 2)]);
    let mut pruned = AlphaBetaSearcher::new(blended_score, Clock::unlimited());
    let result = pruned.search(&board, 3).expect("unlimited clock");
    assert_eq!(result.best_move, Some(Move::new(1, 2)));
}

#[test]
fn no_legal_moves_returns_none_without_evaluating() {
    fn poisoned(_: &Board, _: Player) -> f64 {
        panic!("evaluation must not run when the root has no moves");
    }
    let board = Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2))
        .blocking(&[Move::new(1, 2), Move::new(2, 1)]);
    let mut pruned = AlphaBetaSearcher::new(poisoned, Clock::unlimited());
    let result = pruned.search(&board, 3).expect("unlimited clock");
    assert_eq!(result.best_move, None);
}

#[test]
fn times_out_with_an_expired_clock() {
    let board = Board::with_positions(7, 7, Move::new(3, 3), Move::new(0, 0));
    let mut pruned = AlphaBetaSearcher::new(blended_score, Clock::new(|| 0.0));
    assert!(pruned.search(&board, 3).is_err());
}
