use chrono::NaiveDate;
use sea_orm::{prelude::*, ActiveValue};

use crate::schema;


pub const MOCK_TOURNAMENT_ID: i32 = 1;
pub const MOCK_SECOND_TOURNAMENT_ID: i32 = 2;
pub const MOCK_INACTIVE_PLAYER_ID: i32 = 7;


#[derive(Debug)]
pub struct MockOption {
    pub with_results: bool,
    pub with_stale_participation: bool,
}

impl Default for MockOption {
    fn default() -> Self {
        Self {
            with_results: true,
            with_stale_participation: true,
        }
    }
}

pub async fn make_mock_club<C>(db: &C) -> Result<(), DbErr> where C: ConnectionTrait {
    make_mock_club_with_options(db, Default::default()).await
}

pub async fn make_mock_club_with_options<C>(db: &C, options: MockOption) -> Result<(), DbErr> where C: ConnectionTrait {
    /*
    Tournaments: 1 (Swiss, rounds 1-3), 2 (round 1)
    Players: 1-6 active, 7 inactive
    Round 1 of tournament 1: 1-2 1-0, 3-4 ½-½, 5-6 0-1
    Round 2 of tournament 1: 2-3 0-1, 4-5 1-0 FF, 6 bye 1-0
    Round 3 of tournament 1: 1-3 not played yet
    Round 1 of tournament 2: 1-6 1-0
    */
    schema::tournament::Entity::insert_many(vec![
        tournament(MOCK_TOURNAMENT_ID, "Clubkampioenschap 2024", 7),
        tournament(MOCK_SECOND_TOURNAMENT_ID, "Snelschaak 2024", 5),
    ]).exec(db).await?;

    schema::user::Entity::insert_many(vec![
        user(1, "Jan", "Peeters", 1850, true),
        user(2, "Els", "Janssens", 1720, true),
        user(3, "Pieter", "Maes", 1690, true),
        user(4, "Sofie", "Jacobs", 1610, true),
        user(5, "Tom", "Willems", 1540, true),
        user(6, "Lotte", "Claes", 1480, true),
        user(MOCK_INACTIVE_PLAYER_ID, "Karel", "Wouters", 2010, false),
    ]).exec(db).await?;

    schema::tournament_round::Entity::insert_many(vec![
        round(MOCK_TOURNAMENT_ID, 1, 1, date(2024, 9, 5), "REGULAR"),
        round(MOCK_TOURNAMENT_ID, 2, 2, date(2024, 9, 12), "REGULAR"),
        round(MOCK_TOURNAMENT_ID, 3, 3, date(2024, 9, 19), "REGULAR"),
        round(MOCK_SECOND_TOURNAMENT_ID, 1, 1, date(2024, 10, 3), "REGULAR"),
    ]).exec_without_returning(db).await?;

    let result = |r: &str, winner: Option<i32>| if options.with_results { (Some(r.to_string()), winner) } else { (None, None) };
    schema::game::Entity::insert_many(vec![
        game(1, MOCK_TOURNAMENT_ID, 1, 1, Some(1), Some(2), result("1-0", Some(1))),
        game(2, MOCK_TOURNAMENT_ID, 1, 2, Some(3), Some(4), result("½-½", None)),
        game(3, MOCK_TOURNAMENT_ID, 1, 3, Some(5), Some(6), result("0-1", Some(6))),
        game(4, MOCK_TOURNAMENT_ID, 2, 1, Some(2), Some(3), result("0-1", Some(3))),
        game(5, MOCK_TOURNAMENT_ID, 2, 2, Some(4), Some(5), result("1-0 FF", Some(4))),
        game(6, MOCK_TOURNAMENT_ID, 2, 3, Some(6), None, result("1-0", Some(6))),
        game(7, MOCK_TOURNAMENT_ID, 3, 1, Some(1), Some(3), (None, None)),
        game(8, MOCK_SECOND_TOURNAMENT_ID, 1, 1, Some(1), Some(6), result("1-0", Some(1))),
    ]).exec(db).await?;

    if options.with_stale_participation {
        schema::participation::Entity::insert(schema::participation::ActiveModel {
            user_id: ActiveValue::Set(MOCK_INACTIVE_PLAYER_ID),
            tournament_id: ActiveValue::Set(MOCK_TOURNAMENT_ID),
            score: ActiveValue::Set(3.0),
            tie_break: ActiveValue::Set(4.5),
            color_history: ActiveValue::Set("[\"W\",\"B\",\"W\"]".into()),
            opponents: ActiveValue::Set("[1,2,3]".into()),
        }).exec_without_returning(db).await?;
    }

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid mock date")
}

fn tournament(tournament_id: i32, name: &str, round_count: i32) -> schema::tournament::ActiveModel {
    schema::tournament::ActiveModel {
        tournament_id: ActiveValue::Set(tournament_id),
        name: ActiveValue::Set(name.into()),
        round_count: ActiveValue::Set(round_count),
        is_finished: ActiveValue::Set(false),
        tournament_type: ActiveValue::Set("SWISS".into()),
        megaschaak_config: ActiveValue::Set(None),
    }
}

fn user(user_id: i32, first_name: &str, last_name: &str, rating: i32, is_active: bool) -> schema::user::ActiveModel {
    schema::user::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        first_name: ActiveValue::Set(first_name.into()),
        last_name: ActiveValue::Set(last_name.into()),
        email: ActiveValue::Set(format!("{}.{}@example.org", first_name, last_name).to_lowercase()),
        phone: ActiveValue::Set(None),
        rating: ActiveValue::Set(rating),
        fide_id: ActiveValue::Set(None),
        max_rating: ActiveValue::Set(Some(rating + 25)),
        roles: ActiveValue::Set("[\"MEMBER\"]".into()),
        is_active: ActiveValue::Set(is_active),
    }
}

fn round(tournament_id: i32, round_id: i32, round_number: i32, round_date: NaiveDate, round_type: &str) -> schema::tournament_round::ActiveModel {
    schema::tournament_round::ActiveModel {
        tournament_id: ActiveValue::Set(tournament_id),
        round_id: ActiveValue::Set(round_id),
        round_number: ActiveValue::Set(round_number),
        round_date: ActiveValue::Set(round_date),
        round_type: ActiveValue::Set(round_type.into()),
        label: ActiveValue::Set(None),
    }
}

fn game(game_id: i32, tournament_id: i32, round_id: i32, board_position: i32, white: Option<i32>, black: Option<i32>, (result, winner_id): (Option<String>, Option<i32>)) -> schema::game::ActiveModel {
    schema::game::ActiveModel {
        game_id: ActiveValue::Set(game_id),
        tournament_id: ActiveValue::Set(tournament_id),
        round_id: ActiveValue::Set(round_id),
        white_player_id: ActiveValue::Set(white),
        black_player_id: ActiveValue::Set(black),
        result: ActiveValue::Set(result),
        winner_id: ActiveValue::Set(winner_id),
        board_position: ActiveValue::Set(board_position),
    }
}
