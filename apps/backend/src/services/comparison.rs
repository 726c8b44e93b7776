//! Seed comparison service: loads a seed group and builds the view models.

use sea_orm::ConnectionTrait;

use crate::domain::comparison::RenderableGame;
use crate::domain::game_result::GameResult;
use crate::errors::domain::DomainError;
use crate::repos::game_results;

/// Outcome of comparing one seed.
///
/// Fewer than two stored games is a defined terminal outcome, not an error:
/// the caller renders it as "nothing to compare".
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOutcome {
    TooFewGames { found: usize },
    Games(Vec<RenderableGame>),
}

/// Comparison domain service.
pub struct ComparisonService;

impl ComparisonService {
    pub fn new() -> Self {
        Self
    }

    /// Compare every stored playthrough of `seed` against each other.
    pub async fn compare_seed<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        seed: &str,
    ) -> Result<ComparisonOutcome, DomainError> {
        let group = game_results::load_seed_group(conn, seed).await?;
        Ok(outcome_for_group(group))
    }
}

impl Default for ComparisonService {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the comparison outcome for an already-loaded seed group, one
/// renderable view per game in input order.
pub fn outcome_for_group(group: Vec<GameResult>) -> ComparisonOutcome {
    if group.len() < 2 {
        return ComparisonOutcome::TooFewGames {
            found: group.len(),
        };
    }
    let games = group.iter().map(|game| game.renderable(&group)).collect();
    ComparisonOutcome::Games(games)
}
