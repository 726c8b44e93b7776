//! Seed comparison HTTP routes.

use actix_web::{web, HttpResponse, Result};

use crate::db::require_db;
use crate::error::AppError;
use crate::services::comparison::{ComparisonOutcome, ComparisonService};
use crate::state::app_state::AppState;

/// GET /compare/{seed}
///
/// Returns the comparison view models for every stored playthrough of the
/// seed, as a JSON array (one entry per game, in storage order). A seed with
/// fewer than two stored games is reported as 404 with a message
/// distinguishing "none" from "only one".
async fn compare_seed(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let seed = path.into_inner();
    let db = require_db(&app_state)?;

    let outcome = ComparisonService::new().compare_seed(db, &seed).await?;

    match outcome {
        ComparisonOutcome::TooFewGames { found: 0 } => Err(AppError::not_found(
            "SEED_NOT_FOUND",
            format!("No games found with seed {seed}"),
        )),
        ComparisonOutcome::TooFewGames { .. } => Err(AppError::not_found(
            "SEED_NOT_COMPARABLE",
            format!("Only 1 game found with seed {seed}, not enough to compare"),
        )),
        ComparisonOutcome::Games(games) => Ok(HttpResponse::Ok().json(games)),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{seed}").route(web::get().to(compare_seed)));
}
