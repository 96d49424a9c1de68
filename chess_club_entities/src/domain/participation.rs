use sea_orm::{prelude::*, ActiveValue};
use serde::{Serialize, Deserialize};

use crate::error::ServiceError;
use crate::schema;

use super::game::Color;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participation {
    pub user_id: i32,
    pub tournament_id: i32,
    pub score: f64,
    pub tie_break: f64,
    pub color_history: Vec<Color>,
    pub opponents: Vec<i32>,
}

impl TryFrom<schema::participation::Model> for Participation {
    type Error = ServiceError;

    fn try_from(model: schema::participation::Model) -> Result<Self, Self::Error> {
        Ok(Participation {
            user_id: model.user_id,
            tournament_id: model.tournament_id,
            score: model.score,
            tie_break: model.tie_break,
            color_history: serde_json::from_str(&model.color_history)?,
            opponents: serde_json::from_str(&model.opponents)?,
        })
    }
}

impl Participation {
    pub fn empty(user_id: i32, tournament_id: i32) -> Self {
        Participation {
            user_id,
            tournament_id,
            score: 0.0,
            tie_break: 0.0,
            color_history: vec![],
            opponents: vec![],
        }
    }

    pub fn to_active_model(&self) -> Result<schema::participation::ActiveModel, serde_json::Error> {
        Ok(schema::participation::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            tournament_id: ActiveValue::Set(self.tournament_id),
            score: ActiveValue::Set(self.score),
            tie_break: ActiveValue::Set(self.tie_break),
            color_history: ActiveValue::Set(serde_json::to_string(&self.color_history)?),
            opponents: ActiveValue::Set(serde_json::to_string(&self.opponents)?),
        })
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: i32) -> Result<Vec<Participation>, ServiceError> where C: ConnectionTrait {
        let participations = schema::participation::Entity::find()
            .filter(schema::participation::Column::TournamentId.eq(tournament_id))
            .all(db)
            .await?;

        participations.into_iter().map(Participation::try_from).collect()
    }
}
