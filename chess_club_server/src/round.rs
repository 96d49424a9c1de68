use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use sea_orm::prelude::*;
use serde::{Serialize, Deserialize};

use chess_club_entities::domain::round::{parse_round_date, NewRound, Round, RoundType, RoundUpdate, RoundWithGames};

use crate::patch::PatchValue;
use crate::response::APIError;
use crate::state::AppState;


const MAX_LABEL_LENGTH: usize = 100;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRoundRequest {
    pub tournament_id: i32,
    #[serde(default)]
    pub round_id: Option<i32>,
    pub round_number: i32,
    pub round_date: String,
    #[serde(default)]
    pub round_type: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateRoundRequest {
    #[serde(default)]
    pub round_number: PatchValue<i32>,
    #[serde(default)]
    pub round_date: PatchValue<String>,
    #[serde(default)]
    pub round_type: PatchValue<String>,
    #[serde(default)]
    pub label: PatchValue<Option<String>>,
}

pub(crate) fn positive_id(name: &str, value: i32) -> Result<i32, APIError> {
    if value <= 0 {
        return Err(APIError::validation(format!("{} must be a positive integer", name)));
    }
    Ok(value)
}

fn validate_round_number(round_number: i32) -> Result<i32, APIError> {
    positive_id("round_number", round_number)
}

fn validate_round_date(round_date: &str) -> Result<chrono::NaiveDate, APIError> {
    parse_round_date(round_date).ok_or_else(|| APIError::validation(format!("Invalid round_date '{}'", round_date)))
}

fn validate_round_type(round_type: &str) -> Result<RoundType, APIError> {
    round_type.parse::<RoundType>().map_err(|e| APIError::validation(e.to_string()))
}

fn validate_label(label: Option<String>) -> Result<Option<String>, APIError> {
    match label {
        Some(label) if label.chars().count() > MAX_LABEL_LENGTH => {
            Err(APIError::validation(format!("label must be at most {} characters", MAX_LABEL_LENGTH)))
        },
        label => Ok(label)
    }
}

impl CreateRoundRequest {
    fn validate(self) -> Result<NewRound, APIError> {
        Ok(NewRound {
            tournament_id: positive_id("tournament_id", self.tournament_id)?,
            round_id: self.round_id.map(|id| positive_id("round_id", id)).transpose()?,
            round_number: validate_round_number(self.round_number)?,
            round_date: validate_round_date(&self.round_date)?,
            round_type: self.round_type.as_deref().map(validate_round_type).transpose()?.unwrap_or_default(),
            label: validate_label(self.label)?,
        })
    }
}

impl UpdateRoundRequest {
    fn validate(self) -> Result<RoundUpdate, APIError> {
        Ok(RoundUpdate {
            round_number: self.round_number.into_option().map(validate_round_number).transpose()?,
            round_date: self.round_date.into_option().map(|d| validate_round_date(&d)).transpose()?,
            round_type: self.round_type.into_option().map(|t| validate_round_type(&t)).transpose()?,
            label: self.label.into_option().map(validate_label).transpose()?,
        })
    }
}


async fn get_rounds_handler(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Round>>, APIError> {
    Ok(Json(Round::get_all(&db).await?))
}

async fn create_round_handler(
    State(db): State<DatabaseConnection>,
    request: Result<Json<CreateRoundRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Round>), APIError> {
    let Json(request) = request?;
    let new_round = request.validate()?;
    let round = Round::create(&db, new_round).await?;
    Ok((StatusCode::CREATED, Json(round)))
}

async fn get_tournament_rounds_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<RoundWithGames>>, APIError> {
    let Path(tournament_id) = path?;
    let tournament_id = positive_id("tournament_id", tournament_id)?;
    Ok(Json(Round::get_all_with_games_in_tournament(&db, tournament_id).await?))
}

fn round_key(path: Result<Path<(i32, i32)>, PathRejection>) -> Result<(i32, i32), APIError> {
    let Path((tournament_id, round_id)) = path?;
    Ok((positive_id("tournament_id", tournament_id)?, positive_id("round_id", round_id)?))
}

async fn get_round_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<Json<Round>, APIError> {
    let (tournament_id, round_id) = round_key(path)?;
    Ok(Json(Round::get(&db, tournament_id, round_id).await?))
}

async fn update_round_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    request: Result<Json<UpdateRoundRequest>, JsonRejection>,
) -> Result<Json<Round>, APIError> {
    let (tournament_id, round_id) = round_key(path)?;
    let Json(request) = request?;
    let update = request.validate()?;
    Ok(Json(Round::update(&db, tournament_id, round_id, update).await?))
}

async fn delete_round_handler(
    State(db): State<DatabaseConnection>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<StatusCode, APIError> {
    let (tournament_id, round_id) = round_key(path)?;
    Round::delete(&db, tournament_id, round_id).await?;
    Ok(StatusCode::NO_CONTENT)
}


pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/rondes", get(get_rounds_handler).post(create_round_handler))
        .route("/rondes/:tournament_id/rondes", get(get_tournament_rounds_handler))
        .route(
            "/rondes/:tournament_id/rondes/:round_id",
            get(get_round_handler).put(update_round_handler).delete(delete_round_handler)
        )
}
