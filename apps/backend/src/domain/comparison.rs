//! Comparative view building: one display-ready structure per stored game,
//! with per-card "differs across the group" flags.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::alignment::{align_seat, round_leader};
use crate::domain::game_result::{GameResult, ROUNDS, SEATS};

/// One card as displayed: resolved glyphs plus round outcome annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedCard {
    pub value: String,
    pub suit: String,
    /// Whether this seat won the round.
    pub winner: bool,
    /// Whether the games in the seed group disagree on the card played at
    /// this turn-order position.
    pub differs: bool,
}

/// One round: the leading player's name, the round glory, and the four
/// played cards keyed by physical seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderableRound {
    pub leader: String,
    pub glory: i32,
    pub cards: [PlayedCard; SEATS],
}

/// Display model for one game, resolved against its whole seed group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderableGame {
    pub players: [String; SEATS],
    /// Players whose name occurs in exactly one game of the group. Surfaces
    /// renamed/placeholder players in multi-seed test data; informational
    /// only, never used in alignment.
    pub unique_players: Vec<String>,
    pub starting_player: String,
    pub trump: String,
    pub playing_team: [String; 2],
    pub opposing_team: [String; 2],
    pub playing_team_score: i32,
    pub opposing_team_score: i32,
    pub playing_team_glory: i32,
    pub opposing_team_glory: i32,
    pub playing_team_score_excl_glory: i32,
    pub opposing_team_score_excl_glory: i32,
    pub rounds: [RenderableRound; ROUNDS],
}

impl GameResult {
    /// Build the display structure for this game against the full seed group
    /// (which includes this game itself).
    pub fn renderable(&self, group: &[GameResult]) -> RenderableGame {
        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for game in group {
            for player in &game.players {
                *occurrences.entry(player.as_str()).or_default() += 1;
            }
        }
        let unique_players = self
            .players
            .iter()
            .filter(|player| occurrences.get(player.as_str()) == Some(&1))
            .cloned()
            .collect();

        let starting = usize::from(self.starting_player);
        let from_start = |offset: usize| self.players[(starting + offset) % SEATS].clone();

        RenderableGame {
            players: self.players.clone(),
            unique_players,
            starting_player: from_start(0),
            trump: self.trump.glyph(),
            playing_team: [from_start(0), from_start(2)],
            opposing_team: [from_start(1), from_start(3)],
            playing_team_score: self.scores[0],
            opposing_team_score: self.scores[1],
            playing_team_glory: self.glory[0],
            opposing_team_glory: self.glory[1],
            playing_team_score_excl_glory: self.scores[0] - self.glory[0],
            opposing_team_score_excl_glory: self.scores[1] - self.glory[1],
            rounds: std::array::from_fn(|round| self.renderable_round(group, round)),
        }
    }

    fn renderable_round(&self, group: &[GameResult], round: usize) -> RenderableRound {
        let leader = round_leader(self, round);
        let cards = std::array::from_fn(|seat| {
            let played = &self.rounds[round][seat];
            // The card is identical across the group iff every game played it
            // at this seat's turn-order position; this game is in the group,
            // so comparing everyone against it decides the whole set.
            let differs = group.iter().any(|other| {
                let aligned = usize::from(align_seat(self, other, round, seat as u8));
                other.rounds[round][aligned] != *played
            });
            PlayedCard {
                value: played.0.glyph(),
                suit: played.1.glyph(),
                winner: usize::from(self.round_winners[round]) == seat,
                differs,
            }
        });
        RenderableRound {
            leader: self.players[usize::from(leader)].clone(),
            glory: self.round_glory[round],
            cards,
        }
    }
}
