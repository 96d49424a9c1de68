use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post, routing::put};
use sea_orm::prelude::*;
use serde::{Serialize, Deserialize};
use tracing::info;

use chess_club_entities::domain::standings::{get_standings, recalculate_standings, StandingEntry};
use chess_club_entities::domain::tournament::{NewTournament, Tournament, TournamentDetail, TournamentType};

use crate::response::APIError;
use crate::round::positive_id;
use crate::state::AppState;


#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
    pub round_count: i32,
    #[serde(default)]
    pub tournament_type: Option<String>,
    #[serde(default)]
    pub megaschaak_config: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetFinishedRequest {
    pub is_finished: bool,
}

impl CreateTournamentRequest {
    fn validate(self) -> Result<NewTournament, APIError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(APIError::validation("name must not be empty"));
        }
        if self.round_count < 1 {
            return Err(APIError::validation("round_count must be at least 1"));
        }
        let tournament_type = match self.tournament_type {
            Some(t) => t.parse::<TournamentType>().map_err(|e| APIError::validation(e.to_string()))?,
            None => TournamentType::default()
        };

        Ok(NewTournament {
            name,
            round_count: self.round_count,
            tournament_type,
            megaschaak_config: self.megaschaak_config,
        })
    }
}

fn tournament_id(path: Result<Path<i32>, PathRejection>) -> Result<i32, APIError> {
    let Path(tournament_id) = path?;
    positive_id("tournament_id", tournament_id)
}


async fn get_tournaments_handler(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Tournament>>, APIError> {
    Ok(Json(Tournament::get_all(&db).await?))
}

async fn create_tournament_handler(
    State(db): State<DatabaseConnection>,
    request: Result<Json<CreateTournamentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Tournament>), APIError> {
    let Json(request) = request?;
    let tournament = Tournament::create(&db, request.validate()?).await?;
    info!("Created tournament {} ({})", tournament.tournament_id, tournament.name);
    Ok((StatusCode::CREATED, Json(tournament)))
}

async fn get_tournament_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<TournamentDetail>, APIError> {
    let tournament_id = tournament_id(path)?;
    Ok(Json(Tournament::get_detail(&db, tournament_id).await?))
}

async fn set_finished_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<i32>, PathRejection>,
    request: Result<Json<SetFinishedRequest>, JsonRejection>,
) -> Result<Json<Tournament>, APIError> {
    let tournament_id = tournament_id(path)?;
    let Json(request) = request?;
    Ok(Json(Tournament::set_finished(&db, tournament_id, request.is_finished).await?))
}

async fn get_standings_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<StandingEntry>>, APIError> {
    let tournament_id = tournament_id(path)?;
    Ok(Json(get_standings(&db, tournament_id).await?))
}

async fn recalculate_standings_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<StandingEntry>>, APIError> {
    let tournament_id = tournament_id(path)?;
    let standings = recalculate_standings(&db, tournament_id).await?;
    info!("Recalculated standings of tournament {} ({} participants)", tournament_id, standings.len());
    Ok(Json(standings))
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/tournaments", get(get_tournaments_handler).post(create_tournament_handler))
        .route("/tournaments/:tournament_id", get(get_tournament_handler))
        .route("/tournaments/:tournament_id/finished", put(set_finished_handler))
        .route("/tournaments/:tournament_id/standings", get(get_standings_handler))
        .route("/tournaments/:tournament_id/standings/recalculate", post(recalculate_standings_handler))
}
