use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use itertools::Itertools;
use sea_orm::{prelude::*, ActiveValue, IntoActiveModel, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::error::{ServiceError, ServiceResult, UnknownVariantError};
use crate::schema;

use super::game::GameInfo;
use super::player::PlayerSummary;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundType {
    #[default]
    Regular,
    Makeup,
}

impl RoundType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundType::Regular => "REGULAR",
            RoundType::Makeup => "MAKEUP",
        }
    }
}

impl FromStr for RoundType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "REGULAR" => Ok(RoundType::Regular),
            "MAKEUP" => Ok(RoundType::Makeup),
            _ => Err(UnknownVariantError::new("round type", s)),
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub tournament_id: i32,
    pub round_id: i32,
    pub round_number: i32,
    pub round_date: NaiveDate,
    pub round_type: RoundType,
    pub label: Option<String>,
}

impl TryFrom<schema::tournament_round::Model> for Round {
    type Error = ServiceError;

    fn try_from(model: schema::tournament_round::Model) -> Result<Self, Self::Error> {
        let round_type = model.round_type.parse::<RoundType>().map_err(|e| DbErr::Type(e.to_string()))?;
        Ok(Round {
            tournament_id: model.tournament_id,
            round_id: model.round_id,
            round_number: model.round_number,
            round_date: model.round_date,
            round_type,
            label: model.label,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRound {
    pub tournament_id: i32,
    /// Assigned from the tournament's existing rounds when absent.
    pub round_id: Option<i32>,
    pub round_number: i32,
    pub round_date: NaiveDate,
    pub round_type: RoundType,
    pub label: Option<String>,
}

impl NewRound {
    pub fn new(tournament_id: i32, round_number: i32, round_date: NaiveDate) -> Self {
        NewRound {
            tournament_id,
            round_id: None,
            round_number,
            round_date,
            round_type: RoundType::Regular,
            label: None,
        }
    }
}

/// Fields left as `None` are kept as they are. `label: Some(None)` clears the label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoundUpdate {
    pub round_number: Option<i32>,
    pub round_date: Option<NaiveDate>,
    pub round_type: Option<RoundType>,
    pub label: Option<Option<String>>,
}

impl RoundUpdate {
    pub fn is_empty(&self) -> bool {
        self.round_number.is_none()
            && self.round_date.is_none()
            && self.round_type.is_none()
            && self.label.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundWithGames {
    #[serde(flatten)]
    pub round: Round,
    pub games: Vec<GameInfo>,
}


impl Round {
    pub async fn get_all<C>(db: &C) -> ServiceResult<Vec<Round>> where C: ConnectionTrait {
        let rounds = schema::tournament_round::Entity::find()
            .order_by_asc(schema::tournament_round::Column::TournamentId)
            .order_by_asc(schema::tournament_round::Column::RoundNumber)
            .order_by_asc(schema::tournament_round::Column::RoundId)
            .all(db)
            .await?;

        rounds.into_iter().map(Round::try_from).collect()
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: i32) -> ServiceResult<Vec<Round>> where C: ConnectionTrait {
        let rounds = schema::tournament_round::Entity::find()
            .filter(schema::tournament_round::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::tournament_round::Column::RoundNumber)
            .order_by_asc(schema::tournament_round::Column::RoundId)
            .all(db)
            .await?;

        rounds.into_iter().map(Round::try_from).collect()
    }

    pub async fn get_all_with_games_in_tournament<C>(db: &C, tournament_id: i32) -> ServiceResult<Vec<RoundWithGames>> where C: ConnectionTrait {
        let rounds = Self::get_all_in_tournament(db, tournament_id).await?;

        let games = schema::game::Entity::find()
            .filter(schema::game::Column::TournamentId.eq(tournament_id))
            .order_by_asc(schema::game::Column::BoardPosition)
            .order_by_asc(schema::game::Column::GameId)
            .all(db)
            .await?;

        let player_ids = games.iter()
            .flat_map(|g| [g.white_player_id, g.black_player_id])
            .flatten()
            .unique()
            .collect_vec();
        let players = PlayerSummary::get_many(db, player_ids).await?;

        let mut games_by_round = games.into_iter().into_group_map_by(|g| g.round_id);

        rounds.into_iter().map(|round| -> ServiceResult<RoundWithGames> {
            let games = games_by_round.remove(&round.round_id)
                .unwrap_or_default()
                .into_iter()
                .map(|game| GameInfo::from_model(game, &players))
                .collect::<ServiceResult<Vec<_>>>()?;
            Ok(RoundWithGames { round, games })
        }).collect()
    }

    pub async fn get<C>(db: &C, tournament_id: i32, round_id: i32) -> ServiceResult<Round> where C: ConnectionTrait {
        Self::find_model(db, tournament_id, round_id).await?.try_into()
    }

    async fn find_model<C>(db: &C, tournament_id: i32, round_id: i32) -> ServiceResult<schema::tournament_round::Model> where C: ConnectionTrait {
        schema::tournament_round::Entity::find_by_id((tournament_id, round_id))
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Round {} of tournament {}", round_id, tournament_id)))
    }

    async fn next_round_id<C>(db: &C, tournament_id: i32) -> ServiceResult<i32> where C: ConnectionTrait {
        let last_round = schema::tournament_round::Entity::find()
            .filter(schema::tournament_round::Column::TournamentId.eq(tournament_id))
            .order_by_desc(schema::tournament_round::Column::RoundId)
            .one(db)
            .await?;

        match last_round {
            Some(last_round) => last_round.round_id.checked_add(1).ok_or_else(|| ServiceError::validation(format!(
                "No round id left after {} in tournament {}, pass an explicit round_id", last_round.round_id, tournament_id
            ))),
            None => Ok(1)
        }
    }

    pub async fn create<C>(db: &C, new_round: NewRound) -> ServiceResult<Round> where C: ConnectionTrait {
        let tournament = schema::tournament::Entity::find_by_id(new_round.tournament_id).one(db).await?;
        if tournament.is_none() {
            return Err(ServiceError::not_found(format!("Tournament {}", new_round.tournament_id)));
        }

        let round_id = match new_round.round_id {
            Some(round_id) => {
                let existing = schema::tournament_round::Entity::find_by_id((new_round.tournament_id, round_id)).one(db).await?;
                if existing.is_some() {
                    return Err(ServiceError::validation(format!("Round {} already exists in tournament {}", round_id, new_round.tournament_id)));
                }
                round_id
            },
            None => Self::next_round_id(db, new_round.tournament_id).await?
        };

        let round = Round {
            tournament_id: new_round.tournament_id,
            round_id,
            round_number: new_round.round_number,
            round_date: new_round.round_date,
            round_type: new_round.round_type,
            label: new_round.label,
        };

        let model = schema::tournament_round::ActiveModel {
            tournament_id: ActiveValue::Set(round.tournament_id),
            round_id: ActiveValue::Set(round.round_id),
            round_number: ActiveValue::Set(round.round_number),
            round_date: ActiveValue::Set(round.round_date),
            round_type: ActiveValue::Set(round.round_type.as_str().to_string()),
            label: ActiveValue::Set(round.label.clone()),
        };
        schema::tournament_round::Entity::insert(model).exec_without_returning(db).await?;

        Ok(round)
    }

    pub async fn update<C>(db: &C, tournament_id: i32, round_id: i32, update: RoundUpdate) -> ServiceResult<Round> where C: ConnectionTrait {
        let existing = Self::find_model(db, tournament_id, round_id).await?;
        if update.is_empty() {
            return existing.try_into();
        }

        let mut model = existing.into_active_model();
        if let Some(round_number) = update.round_number {
            model.round_number = ActiveValue::Set(round_number);
        }
        if let Some(round_date) = update.round_date {
            model.round_date = ActiveValue::Set(round_date);
        }
        if let Some(round_type) = update.round_type {
            model.round_type = ActiveValue::Set(round_type.as_str().to_string());
        }
        if let Some(label) = update.label {
            model.label = ActiveValue::Set(label);
        }

        model.update(db).await?.try_into()
    }

    pub async fn delete<C>(db: &C, tournament_id: i32, round_id: i32) -> ServiceResult<()> where C: ConnectionTrait {
        Self::find_model(db, tournament_id, round_id).await?;
        schema::tournament_round::Entity::delete_by_id((tournament_id, round_id)).exec(db).await?;
        Ok(())
    }
}


/// Accepts plain dates (`2024-09-05`) as well as the ISO timestamps browsers send
/// (`2024-09-05T19:30:00.000Z`), keeping the calendar date of the given offset.
pub fn parse_round_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|d| d.date()))
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{parse_round_date, RoundType, RoundUpdate};

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_round_date("2024-09-05"), NaiveDate::from_ymd_opt(2024, 9, 5));
    }

    #[test]
    fn test_parse_browser_timestamp() {
        assert_eq!(parse_round_date("2024-09-05T19:30:00.000Z"), NaiveDate::from_ymd_opt(2024, 9, 5));
        assert_eq!(parse_round_date("2024-09-05T23:30:00+02:00"), NaiveDate::from_ymd_opt(2024, 9, 5));
        assert_eq!(parse_round_date("2024-09-05T19:30:00"), NaiveDate::from_ymd_opt(2024, 9, 5));
    }

    #[test]
    fn test_reject_garbage_date() {
        assert_eq!(parse_round_date("next thursday"), None);
        assert_eq!(parse_round_date("2024-13-01"), None);
        assert_eq!(parse_round_date(""), None);
    }

    #[test]
    fn test_round_type_parsing() {
        assert_eq!("REGULAR".parse::<RoundType>().unwrap(), RoundType::Regular);
        assert_eq!("makeup".parse::<RoundType>().unwrap(), RoundType::Makeup);
        assert!("BLITZ".parse::<RoundType>().is_err());
    }

    #[test]
    fn test_round_type_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&RoundType::Makeup).unwrap(), "\"MAKEUP\"");
    }

    #[test]
    fn test_empty_update() {
        assert!(RoundUpdate::default().is_empty());
        assert!(!RoundUpdate { label: Some(None), ..Default::default() }.is_empty());
    }
}
