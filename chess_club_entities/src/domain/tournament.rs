use std::str::FromStr;

use sea_orm::{prelude::*, ActiveValue, IntoActiveModel, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::error::{ServiceError, ServiceResult, UnknownVariantError};
use crate::schema;

use super::round::Round;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentType {
    #[default]
    Swiss,
    RoundRobin,
}

impl TournamentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentType::Swiss => "SWISS",
            TournamentType::RoundRobin => "ROUND_ROBIN",
        }
    }
}

impl FromStr for TournamentType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SWISS" => Ok(TournamentType::Swiss),
            "ROUND_ROBIN" => Ok(TournamentType::RoundRobin),
            _ => Err(UnknownVariantError::new("tournament type", s)),
        }
    }
}


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Tournament {
    pub tournament_id: i32,
    pub name: String,
    pub round_count: i32,
    pub is_finished: bool,
    pub tournament_type: TournamentType,
    pub megaschaak_config: Option<serde_json::Value>,
}

impl TryFrom<schema::tournament::Model> for Tournament {
    type Error = ServiceError;

    fn try_from(model: schema::tournament::Model) -> Result<Self, Self::Error> {
        let tournament_type = model.tournament_type.parse::<TournamentType>().map_err(|e| DbErr::Type(e.to_string()))?;
        Ok(Tournament {
            tournament_id: model.tournament_id,
            name: model.name,
            round_count: model.round_count,
            is_finished: model.is_finished,
            tournament_type,
            megaschaak_config: model.megaschaak_config,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTournament {
    pub name: String,
    pub round_count: i32,
    pub tournament_type: TournamentType,
    pub megaschaak_config: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentDetail {
    #[serde(flatten)]
    pub tournament: Tournament,
    pub rounds: Vec<Round>,
}


impl Tournament {
    pub async fn get_all<C>(db: &C) -> ServiceResult<Vec<Tournament>> where C: ConnectionTrait {
        let tournaments = schema::tournament::Entity::find()
            .order_by_asc(schema::tournament::Column::TournamentId)
            .all(db)
            .await?;

        tournaments.into_iter().map(Tournament::try_from).collect()
    }

    pub async fn get<C>(db: &C, tournament_id: i32) -> ServiceResult<Tournament> where C: ConnectionTrait {
        Self::find_model(db, tournament_id).await?.try_into()
    }

    async fn find_model<C>(db: &C, tournament_id: i32) -> ServiceResult<schema::tournament::Model> where C: ConnectionTrait {
        schema::tournament::Entity::find_by_id(tournament_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Tournament {}", tournament_id)))
    }

    pub async fn get_detail<C>(db: &C, tournament_id: i32) -> ServiceResult<TournamentDetail> where C: ConnectionTrait {
        let tournament = Self::get(db, tournament_id).await?;
        let rounds = Round::get_all_in_tournament(db, tournament_id).await?;
        Ok(TournamentDetail { tournament, rounds })
    }

    pub async fn create<C>(db: &C, new_tournament: NewTournament) -> ServiceResult<Tournament> where C: ConnectionTrait {
        let model = schema::tournament::ActiveModel {
            tournament_id: ActiveValue::NotSet,
            name: ActiveValue::Set(new_tournament.name),
            round_count: ActiveValue::Set(new_tournament.round_count),
            is_finished: ActiveValue::Set(false),
            tournament_type: ActiveValue::Set(new_tournament.tournament_type.as_str().to_string()),
            megaschaak_config: ActiveValue::Set(new_tournament.megaschaak_config),
        };

        model.insert(db).await?.try_into()
    }

    pub async fn set_finished<C>(db: &C, tournament_id: i32, is_finished: bool) -> ServiceResult<Tournament> where C: ConnectionTrait {
        let mut model = Self::find_model(db, tournament_id).await?.into_active_model();
        model.is_finished = ActiveValue::Set(is_finished);
        model.update(db).await?.try_into()
    }
}
