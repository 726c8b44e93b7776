//! Domain layer: pure comparison logic over stored game results.

pub mod alignment;
pub mod cards;
pub mod comparison;
pub mod game_result;

#[cfg(test)]
pub mod test_fixtures;

#[cfg(test)]
mod tests_alignment;
#[cfg(test)]
mod tests_comparison;
#[cfg(test)]
mod tests_props_alignment;

// Re-exports for ergonomics
pub use alignment::{align_seat, round_leader};
pub use cards::{StoredCard, SuitTag, ValueTag};
pub use comparison::{PlayedCard, RenderableGame, RenderableRound};
pub use game_result::{GameResult, ROUNDS, SEATS};
