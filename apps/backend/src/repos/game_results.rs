//! Game result repository functions for the domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::game_results_sea as results_adapter;
use crate::domain::game_result::GameResult;
use crate::entities::game_results;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Load the full seed group: every stored result for `seed`, decoded and
/// validated, in insertion order.
///
/// One malformed row fails the whole load. Silently dropping or truncating a
/// record would change every other game's `differs` flags, so a partial
/// group is never returned.
pub async fn load_seed_group<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seed: &str,
) -> Result<Vec<GameResult>, DomainError> {
    let rows = results_adapter::find_by_seed(conn, seed).await?;
    rows.iter().map(decode_result).collect()
}

fn decode_result(row: &game_results::Model) -> Result<GameResult, DomainError> {
    let game: GameResult = serde_json::from_str(&row.result).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("game result {}: {e}", row.id),
        )
    })?;
    game.validate()?;
    Ok(game)
}
