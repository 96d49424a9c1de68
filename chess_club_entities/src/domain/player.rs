use std::collections::HashMap;

use sea_orm::{prelude::*, QueryOrder};
use serde::{Serialize, Deserialize};

use crate::error::{ServiceError, ServiceResult};
use crate::schema;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    BoardMember,
    Member,
    FormerMember,
}

/// Public view of a club member. Contact details stay in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub fide_id: Option<i32>,
    pub max_rating: Option<i32>,
    pub roles: Vec<UserRole>,
    pub is_active: bool,
}

impl TryFrom<schema::user::Model> for Player {
    type Error = ServiceError;

    fn try_from(model: schema::user::Model) -> Result<Self, Self::Error> {
        Ok(Player {
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            rating: model.rating,
            fide_id: model.fide_id,
            max_rating: model.max_rating,
            roles: serde_json::from_str(&model.roles)?,
            is_active: model.is_active,
        })
    }
}

impl Player {
    pub async fn get_all_active<C>(db: &C) -> ServiceResult<Vec<Player>> where C: ConnectionTrait {
        let users = schema::user::Entity::find()
            .filter(schema::user::Column::IsActive.eq(true))
            .order_by_desc(schema::user::Column::Rating)
            .order_by_asc(schema::user::Column::LastName)
            .order_by_asc(schema::user::Column::FirstName)
            .all(db)
            .await?;

        users.into_iter().map(Player::try_from).collect()
    }

    pub async fn get<C>(db: &C, user_id: i32) -> ServiceResult<Player> where C: ConnectionTrait {
        schema::user::Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Player {}", user_id)))?
            .try_into()
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
}

impl From<schema::user::Model> for PlayerSummary {
    fn from(model: schema::user::Model) -> Self {
        PlayerSummary {
            user_id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            rating: model.rating,
        }
    }
}

impl PlayerSummary {
    pub async fn get_many<C>(db: &C, user_ids: Vec<i32>) -> Result<HashMap<i32, PlayerSummary>, DbErr> where C: ConnectionTrait {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = schema::user::Entity::find()
            .filter(schema::user::Column::UserId.is_in(user_ids))
            .all(db)
            .await?;

        Ok(users.into_iter().map(|u| (u.user_id, u.into())).collect())
    }
}
