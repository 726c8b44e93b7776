//! SeaORM adapter for the game results table - generic over ConnectionTrait.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entities::game_results;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

/// All stored results for one seed, in insertion order.
pub async fn find_by_seed<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    seed: &str,
) -> Result<Vec<game_results::Model>, sea_orm::DbErr> {
    game_results::Entity::find()
        .filter(game_results::Column::Seed.eq(seed))
        .order_by_asc(game_results::Column::Id)
        .all(conn)
        .await
}
