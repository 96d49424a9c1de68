use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::{Json, Router, routing::put};
use sea_orm::prelude::*;
use serde::{Serialize, Deserialize};

use chess_club_entities::domain::game::{Game, GameResult};

use crate::response::APIError;
use crate::round::positive_id;
use crate::state::AppState;


/// `result: null` clears the result.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetResultRequest {
    pub result: Option<String>,
}

async fn set_result_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<i32>, PathRejection>,
    request: Result<Json<SetResultRequest>, JsonRejection>,
) -> Result<Json<Game>, APIError> {
    let Path(game_id) = path?;
    let game_id = positive_id("game_id", game_id)?;
    let Json(request) = request?;

    let result = request.result
        .map(|r| r.parse::<GameResult>())
        .transpose()
        .map_err(|e| APIError::validation(e.to_string()))?;

    Ok(Json(Game::set_result(&db, game_id, result).await?))
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/games/:game_id/result", put(set_result_handler))
}
