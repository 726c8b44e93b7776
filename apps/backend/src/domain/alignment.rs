//! Seat/turn alignment between playthroughs of the same deal.
//!
//! Two games of one seed can have different round leaders, so "the same
//! turn" lives at different physical seats in each game. A seat's turn-order
//! position is its clockwise distance from the round leader, which makes the
//! whole mapping a single modular rotation rather than a lookup table.

use crate::domain::game_result::GameResult;

/// Seat that leads the given round: the game's starting player for round 0,
/// otherwise the winner of the previous round.
pub fn round_leader(game: &GameResult, round: usize) -> u8 {
    if round == 0 {
        game.starting_player
    } else {
        game.round_winners[round - 1]
    }
}

/// Seat in `other` holding the same turn-order position that `seat` holds in
/// `game` for the given round.
///
/// `seat` sits `(seat - leader) mod 4` places after `game`'s leader; the seat
/// at that distance from `other`'s leader is the equivalent turn slot.
pub fn align_seat(game: &GameResult, other: &GameResult, round: usize, seat: u8) -> u8 {
    (seat + 4 + round_leader(other, round) - round_leader(game, round)) % 4
}
