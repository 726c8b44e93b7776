use crate::domain::alignment::{align_seat, round_leader};
use crate::domain::test_fixtures::game_with_leaders;

#[test]
fn round_zero_leader_is_starting_player() {
    let game = game_with_leaders(3, [0, 1, 2, 3, 0, 1, 2, 3]);
    assert_eq!(round_leader(&game, 0), 3);
}

#[test]
fn later_round_leader_is_previous_winner() {
    let game = game_with_leaders(3, [0, 1, 2, 3, 0, 1, 2, 3]);
    assert_eq!(round_leader(&game, 1), 0);
    assert_eq!(round_leader(&game, 4), 3);
    assert_eq!(round_leader(&game, 7), 2);
}

#[test]
fn align_seat_is_identity_within_one_game() {
    let game = game_with_leaders(1, [2, 0, 3, 1, 2, 0, 3, 1]);
    for round in 0..8 {
        for seat in 0..4 {
            assert_eq!(align_seat(&game, &game, round, seat), seat);
        }
    }
}

#[test]
fn align_seat_follows_rotated_leaders() {
    // Game A: seat 2 won round 0, so seat 2 leads round 1 (turn position 0).
    // Game B: seat 1 won round 0. The equivalent of A's seat 2 in round 1 is
    // B's seat 1, not B's seat 2.
    let a = game_with_leaders(0, [2, 0, 0, 0, 0, 0, 0, 0]);
    let b = game_with_leaders(0, [1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(align_seat(&a, &b, 1, 2), 1);
    assert_eq!(align_seat(&b, &a, 1, 1), 2);
    // Turn position 1 sits one seat clockwise of each leader.
    assert_eq!(align_seat(&a, &b, 1, 3), 2);
}

#[test]
fn align_seat_round_trips_between_two_games() {
    let a = game_with_leaders(2, [3, 1, 0, 2, 3, 1, 0, 2]);
    let b = game_with_leaders(0, [1, 2, 3, 0, 1, 2, 3, 0]);
    for round in 0..8 {
        for seat in 0..4 {
            let there = align_seat(&a, &b, round, seat);
            assert_eq!(align_seat(&b, &a, round, there), seat);
        }
    }
}
