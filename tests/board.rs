use isobot::board::{Board, Move, Player, Position};
use pretty_assertions::assert_eq;

#[test]
fn opening_moves_cover_every_blank_cell() {
    let board = Board::new(3, 3);
    let moves = board.legal_moves(Player::One);
    assert_eq!(moves.len(), 9);
    // Row-major order, part of the move-ordering contract.
    assert_eq!(moves[0], Move::new(0, 0));
    assert_eq!(moves[8], Move::new(2, 2));
}

#[test]
fn second_opening_excludes_occupied_cell() {
    let board = Board::new(3, 3).apply(Move::new(1, 1));
    let moves = board.legal_moves(Player::Two);
    assert_eq!(moves.len(), 8);
    assert!(!moves.contains(&Move::new(1, 1)));
}

#[test]
fn placed_player_moves_by_knight_jump() {
    let board = Board::with_positions(5, 5, Move::new(2, 2), Move::new(0, 0));
    let moves = board.legal_moves(Player::One);
    let expected = vec![
        Move::new(0, 1),
        Move::new(0, 3),
        Move::new(1, 0),
        Move::new(1, 4),
        Move::new(3, 0),
        Move::new(3, 4),
        Move::new(4, 1),
        Move::new(4, 3),
    ];
    assert_eq!(moves, expected);
}

#[test]
fn visited_cells_stay_blocked() {
    let board = Board::with_positions(5, 5, Move::new(2, 2), Move::new(0, 0));
    let board = board.apply(Move::new(0, 1));
    // Player 1 left (2, 2); nobody may enter it again.
    let p2_moves = board.legal_moves(Player::Two);
    assert!(!p2_moves.contains(&Move::new(2, 2)));
    assert!(!p2_moves.contains(&Move::new(0, 1)));
}

#[test]
fn apply_returns_independent_state() {
    let board = Board::with_positions(5, 5, Move::new(2, 2), Move::new(0, 0));
    let snapshot = board.clone();
    let _child = board.apply(Move::new(0, 1));
    assert_eq!(board, snapshot, "apply must not mutate the parent state");
}

#[test]
fn move_enumeration_is_stable() {
    let board = Board::with_positions(7, 7, Move::new(3, 3), Move::new(0, 0));
    assert_eq!(
        board.legal_moves(Player::One),
        board.legal_moves(Player::One)
    );
}

#[test]
fn boxed_in_player_to_move_has_lost() {
    // Player 1 at a corner with both knight exits blocked, player 1 to move.
    let board = Board::with_positions(3, 3, Move::new(0, 0), Move::new(2, 2))
        .blocking(&[Move::new(1, 2), Move::new(2, 1)]);
    assert!(board.is_loser(Player::One));
    assert!(board.is_winner(Player::Two));
    assert!(!board.is_loser(Player::Two));
    assert!(!board.is_winner(Player::One));
}

#[test]
fn turns_alternate() {
    let board = Board::new(3, 3);
    assert_eq!(board.to_move(), Player::One);
    let board = board.apply(Move::new(0, 0));
    assert_eq!(board.to_move(), Player::Two);
    let board = board.apply(Move::new(2, 2));
    assert_eq!(board.to_move(), Player::One);
}
