//! The raw stored game record.

use serde::{Deserialize, Serialize};

use crate::domain::cards::{StoredCard, SuitTag};
use crate::errors::domain::DomainError;

/// Fixed table size: four physical seats, numbered 0-3.
pub const SEATS: usize = 4;
/// Fixed game length: eight rounds per game.
pub const ROUNDS: usize = 8;

/// A completed game as persisted by the recorder, decoded from the `result`
/// JSON column. Field names are PascalCase on the wire for compatibility with
/// the stored data. `rounds` is indexed by physical seat, not turn order.
///
/// The fixed-size arrays make wrong-length records fail decoding outright;
/// seat indices still need an explicit [`GameResult::validate`] pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameResult {
    pub players: [String; SEATS],
    pub starting_player: u8,
    pub trump: SuitTag,
    pub scores: [i32; 2],
    pub glory: [i32; 2],
    pub rounds: [[StoredCard; SEATS]; ROUNDS],
    pub round_winners: [u8; ROUNDS],
    pub round_glory: [i32; ROUNDS],
}

impl GameResult {
    /// Reject out-of-range seat indices before any alignment arithmetic runs.
    /// Alignment math silently wrapping a bad seat would produce a plausible
    /// but wrong comparison, which is worse than refusing to render.
    pub fn validate(&self) -> Result<(), DomainError> {
        if usize::from(self.starting_player) >= SEATS {
            return Err(DomainError::validation(format!(
                "starting player seat {} out of range",
                self.starting_player
            )));
        }
        for (round, &winner) in self.round_winners.iter().enumerate() {
            if usize::from(winner) >= SEATS {
                return Err(DomainError::validation(format!(
                    "round {round} winner seat {winner} out of range"
                )));
            }
        }
        Ok(())
    }
}
