use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use sea_orm::prelude::*;

use chess_club_entities::domain::player::Player;

use crate::response::APIError;
use crate::round::positive_id;
use crate::state::AppState;


async fn get_players_handler(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Player>>, APIError> {
    Ok(Json(Player::get_all_active(&db).await?))
}

async fn get_player_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Player>, APIError> {
    let Path(user_id) = path?;
    let user_id = positive_id("user_id", user_id)?;
    Ok(Json(Player::get(&db, user_id).await?))
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/players", get(get_players_handler))
        .route("/players/:user_id", get(get_player_handler))
}
