use std::collections::HashMap;
use std::str::FromStr;

use sea_orm::{prelude::*, ActiveValue, IntoActiveModel};
use serde::{Serialize, Deserialize};

use crate::error::{ServiceError, ServiceResult, UnknownVariantError};
use crate::schema;

use super::player::PlayerSummary;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "B")]
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    WhiteWinsByForfeit,
    BlackWinsByForfeit,
    DoubleForfeit,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "½-½",
            GameResult::WhiteWinsByForfeit => "1-0 FF",
            GameResult::BlackWinsByForfeit => "0-1 FF",
            GameResult::DoubleForfeit => "0-0 FF",
        }
    }

    /// Points for (white, black).
    pub fn points(&self) -> (f64, f64) {
        match self {
            GameResult::WhiteWins | GameResult::WhiteWinsByForfeit => (1.0, 0.0),
            GameResult::BlackWins | GameResult::BlackWinsByForfeit => (0.0, 1.0),
            GameResult::Draw => (0.5, 0.5),
            GameResult::DoubleForfeit => (0.0, 0.0),
        }
    }

    pub fn points_for(&self, color: Color) -> f64 {
        let (white, black) = self.points();
        match color {
            Color::White => white,
            Color::Black => black,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::WhiteWins | GameResult::WhiteWinsByForfeit => Some(Color::White),
            GameResult::BlackWins | GameResult::BlackWinsByForfeit => Some(Color::Black),
            GameResult::Draw | GameResult::DoubleForfeit => None,
        }
    }

    pub fn is_forfeit(&self) -> bool {
        matches!(self, GameResult::WhiteWinsByForfeit | GameResult::BlackWinsByForfeit | GameResult::DoubleForfeit)
    }
}

impl FromStr for GameResult {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_ascii_uppercase();
        match normalized.as_str() {
            "1-0" => Ok(GameResult::WhiteWins),
            "0-1" => Ok(GameResult::BlackWins),
            "½-½" | "1/2-1/2" => Ok(GameResult::Draw),
            "1-0FF" => Ok(GameResult::WhiteWinsByForfeit),
            "0-1FF" => Ok(GameResult::BlackWinsByForfeit),
            "0-0FF" => Ok(GameResult::DoubleForfeit),
            _ => Err(UnknownVariantError::new("game result", s)),
        }
    }
}

impl From<GameResult> for String {
    fn from(result: GameResult) -> Self {
        result.as_str().to_string()
    }
}

impl TryFrom<String> for GameResult {
    type Error = UnknownVariantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn parse_stored_result(result: Option<String>) -> Result<Option<GameResult>, DbErr> {
    result.map(|r| r.parse::<GameResult>().map_err(|e| DbErr::Type(e.to_string()))).transpose()
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub game_id: i32,
    pub tournament_id: i32,
    pub round_id: i32,
    pub white_player_id: Option<i32>,
    pub black_player_id: Option<i32>,
    pub result: Option<GameResult>,
    pub winner_id: Option<i32>,
    pub board_position: i32,
}

impl TryFrom<schema::game::Model> for Game {
    type Error = ServiceError;

    fn try_from(model: schema::game::Model) -> Result<Self, Self::Error> {
        Ok(Game {
            game_id: model.game_id,
            tournament_id: model.tournament_id,
            round_id: model.round_id,
            white_player_id: model.white_player_id,
            black_player_id: model.black_player_id,
            result: parse_stored_result(model.result)?,
            winner_id: model.winner_id,
            board_position: model.board_position,
        })
    }
}

impl Game {
    pub fn player(&self, color: Color) -> Option<i32> {
        match color {
            Color::White => self.white_player_id,
            Color::Black => self.black_player_id,
        }
    }

    pub async fn get<C>(db: &C, game_id: i32) -> ServiceResult<Game> where C: ConnectionTrait {
        schema::game::Entity::find_by_id(game_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Game {}", game_id)))?
            .try_into()
    }

    pub async fn get_all_in_tournament<C>(db: &C, tournament_id: i32) -> ServiceResult<Vec<Game>> where C: ConnectionTrait {
        let games = schema::game::Entity::find()
            .filter(schema::game::Column::TournamentId.eq(tournament_id))
            .all(db)
            .await?;

        games.into_iter().map(Game::try_from).collect()
    }

    /// Stores `result` and derives the winner from it. `None` clears both.
    pub async fn set_result<C>(db: &C, game_id: i32, result: Option<GameResult>) -> ServiceResult<Game> where C: ConnectionTrait {
        let existing = schema::game::Entity::find_by_id(game_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("Game {}", game_id)))?;
        let game = Game::try_from(existing.clone())?;

        let winner_id = match result {
            Some(result) => {
                for color in [Color::White, Color::Black] {
                    if game.player(color).is_none() && result.points_for(color) > 0.0 {
                        return Err(ServiceError::validation(format!(
                            "Result {} awards points to the missing player of game {}", result.as_str(), game_id
                        )));
                    }
                }
                result.winner().and_then(|color| game.player(color))
            },
            None => None
        };

        let mut model = existing.into_active_model();
        model.result = ActiveValue::Set(result.map(String::from));
        model.winner_id = ActiveValue::Set(winner_id);

        model.update(db).await?.try_into()
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    pub game_id: i32,
    pub board_position: i32,
    pub result: Option<GameResult>,
    pub winner_id: Option<i32>,
    pub white: Option<PlayerSummary>,
    pub black: Option<PlayerSummary>,
}

impl GameInfo {
    pub fn from_model(model: schema::game::Model, players: &HashMap<i32, PlayerSummary>) -> ServiceResult<Self> {
        Ok(GameInfo {
            game_id: model.game_id,
            board_position: model.board_position,
            result: parse_stored_result(model.result)?,
            winner_id: model.winner_id,
            white: model.white_player_id.and_then(|id| players.get(&id).cloned()),
            black: model.black_player_id.and_then(|id| players.get(&id).cloned()),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::{Color, GameResult};

    #[test]
    fn test_parse_results() {
        assert_eq!("1-0".parse::<GameResult>().unwrap(), GameResult::WhiteWins);
        assert_eq!("0-1".parse::<GameResult>().unwrap(), GameResult::BlackWins);
        assert_eq!("½-½".parse::<GameResult>().unwrap(), GameResult::Draw);
        assert_eq!("1/2-1/2".parse::<GameResult>().unwrap(), GameResult::Draw);
        assert_eq!("1-0 FF".parse::<GameResult>().unwrap(), GameResult::WhiteWinsByForfeit);
        assert_eq!("0-1ff".parse::<GameResult>().unwrap(), GameResult::BlackWinsByForfeit);
        assert_eq!(" 0-0 FF ".parse::<GameResult>().unwrap(), GameResult::DoubleForfeit);
    }

    #[test]
    fn test_reject_unknown_result() {
        assert!("2-0".parse::<GameResult>().is_err());
        assert!("".parse::<GameResult>().is_err());
        assert!("draw".parse::<GameResult>().is_err());
    }

    #[test]
    fn test_forfeit_points_and_winner() {
        assert_eq!(GameResult::WhiteWinsByForfeit.points(), (1.0, 0.0));
        assert_eq!(GameResult::WhiteWinsByForfeit.winner(), Some(Color::White));
        assert_eq!(GameResult::DoubleForfeit.points(), (0.0, 0.0));
        assert_eq!(GameResult::DoubleForfeit.winner(), None);
        assert!(GameResult::DoubleForfeit.is_forfeit());
        assert!(!GameResult::Draw.is_forfeit());
    }

    #[test]
    fn test_result_serializes_as_notation() {
        assert_eq!(serde_json::to_string(&GameResult::Draw).unwrap(), "\"½-½\"");
        assert_eq!(serde_json::from_str::<GameResult>("\"0-1 FF\"").unwrap(), GameResult::BlackWinsByForfeit);
        assert!(serde_json::from_str::<GameResult>("\"3-0\"").is_err());
    }
}
