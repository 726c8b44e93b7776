//! Shared constructors for domain tests.

use crate::domain::cards::{StoredCard, SuitTag, ValueTag};
use crate::domain::game_result::{GameResult, ROUNDS, SEATS};

pub fn card(value: &str, suit: &str) -> StoredCard {
    StoredCard(ValueTag(value.to_string()), SuitTag(suit.to_string()))
}

/// A game where every seat plays the same filler card in every round; only
/// the leader structure matters for alignment tests.
pub fn game_with_leaders(starting_player: u8, round_winners: [u8; ROUNDS]) -> GameResult {
    GameResult {
        players: ["North", "East", "South", "West"].map(String::from),
        starting_player,
        trump: SuitTag("CLUBS".to_string()),
        scores: [82, 80],
        glory: [20, 0],
        rounds: std::array::from_fn(|_| std::array::from_fn(|_| card("SEVEN", "CLUBS"))),
        round_winners,
        round_glory: [0; ROUNDS],
    }
}

pub fn with_players(mut game: GameResult, players: [&str; SEATS]) -> GameResult {
    game.players = players.map(String::from);
    game
}

pub fn with_round_cards(
    mut game: GameResult,
    round: usize,
    cards: [StoredCard; SEATS],
) -> GameResult {
    game.rounds[round] = cards;
    game
}
