use std::error::Error;

use assert_matches::assert_matches;
use chess_club_entities::domain::game::{Color, Game, GameResult};
use chess_club_entities::domain::participation::Participation;
use chess_club_entities::domain::standings::{get_standings, recalculate_standings};
use chess_club_entities::error::ServiceError;
use chess_club_entities::mock::{self, MockOption, MOCK_INACTIVE_PLAYER_ID, MOCK_SECOND_TOURNAMENT_ID, MOCK_TOURNAMENT_ID};

mod common;


#[tokio::test]
async fn test_recalculate_standings() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(true).await?;

    let standings = recalculate_standings(&db, MOCK_TOURNAMENT_ID).await?;

    assert_eq!(standings.iter().map(|s| s.user_id).collect::<Vec<_>>(), vec![6, 4, 3, 1, 5, 2, MOCK_INACTIVE_PLAYER_ID]);
    assert_eq!(standings.iter().map(|s| s.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);

    let by_user = |id: i32| standings.iter().find(|s| s.user_id == id).unwrap();
    assert_eq!(by_user(6).score, 2.0);
    assert_eq!(by_user(6).games_played, 1);
    assert_eq!(by_user(3).score, 1.5);
    assert_eq!(by_user(3).tie_break, 1.5);
    assert_eq!(by_user(5).tie_break, 3.5);
    assert_eq!(by_user(2).tie_break, 2.5);
    assert_eq!(by_user(2).color_history, vec![Color::Black, Color::White]);
    assert_eq!(by_user(2).opponents, vec![1, 3]);
    Ok(())
}

#[tokio::test]
async fn test_recalculate_resets_stale_participation() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(true).await?;

    recalculate_standings(&db, MOCK_TOURNAMENT_ID).await?;

    let participations = Participation::get_all_in_tournament(&db, MOCK_TOURNAMENT_ID).await?;
    let stale = participations.iter().find(|p| p.user_id == MOCK_INACTIVE_PLAYER_ID).unwrap();
    assert_eq!(stale, &Participation::empty(MOCK_INACTIVE_PLAYER_ID, MOCK_TOURNAMENT_ID));
    Ok(())
}

#[tokio::test]
async fn test_recalculate_is_idempotent() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(true).await?;

    let first = recalculate_standings(&db, MOCK_TOURNAMENT_ID).await?;
    let second = recalculate_standings(&db, MOCK_TOURNAMENT_ID).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_recalculate_picks_up_new_result() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(true).await?;

    Game::set_result(&db, 7, Some(GameResult::WhiteWins)).await?;
    let standings = recalculate_standings(&db, MOCK_TOURNAMENT_ID).await?;

    let jan = standings.iter().find(|s| s.user_id == 1).unwrap();
    assert_eq!(jan.score, 2.0);
    assert_eq!(jan.opponents, vec![2, 3]);
    assert_eq!(jan.color_history, vec![Color::White, Color::White]);
    Ok(())
}

#[tokio::test]
async fn test_tournaments_are_scored_separately() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(true).await?;

    let standings = recalculate_standings(&db, MOCK_SECOND_TOURNAMENT_ID).await?;
    assert_eq!(standings.len(), 2);
    assert_eq!(standings[0].user_id, 1);
    assert_eq!(standings[0].score, 1.0);
    assert_eq!(standings[1].user_id, 6);
    assert_eq!(standings[1].score, 0.0);
    Ok(())
}

#[tokio::test]
async fn test_standings_before_recalculation() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(true).await?;

    let standings = get_standings(&db, MOCK_TOURNAMENT_ID).await?;
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].user_id, MOCK_INACTIVE_PLAYER_ID);
    assert_eq!(standings[0].score, 3.0);
    Ok(())
}

#[tokio::test]
async fn test_standings_of_unknown_tournament_fail() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(true).await?;

    assert_matches!(get_standings(&db, 99).await, Err(ServiceError::NotFound(_)));
    assert_matches!(recalculate_standings(&db, 99).await, Err(ServiceError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_recalculate_without_results() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(false).await?;
    mock::make_mock_club_with_options(&db, MockOption { with_results: false, ..Default::default() }).await?;

    let standings = recalculate_standings(&db, MOCK_TOURNAMENT_ID).await?;
    assert_eq!(standings.len(), 1);
    assert_eq!(standings[0].user_id, MOCK_INACTIVE_PLAYER_ID);
    assert_eq!(standings[0].score, 0.0);
    assert_eq!(standings[0].games_played, 0);
    assert!(standings[0].opponents.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_without_stale_participation() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(false).await?;
    mock::make_mock_club_with_options(&db, MockOption { with_stale_participation: false, ..Default::default() }).await?;

    assert!(get_standings(&db, MOCK_TOURNAMENT_ID).await?.is_empty());
    let standings = recalculate_standings(&db, MOCK_TOURNAMENT_ID).await?;
    assert_eq!(standings.len(), 6);
    assert!(standings.iter().all(|s| s.user_id != MOCK_INACTIVE_PLAYER_ID));
    Ok(())
}

#[tokio::test]
async fn test_bye_scores_but_is_not_a_played_game() -> Result<(), Box<dyn Error>> {
    let db = common::set_up_db(true).await?;

    let standings = recalculate_standings(&db, MOCK_TOURNAMENT_ID).await?;
    let lotte = standings.iter().find(|s| s.user_id == 6).unwrap();
    assert_eq!(lotte.score, 2.0);
    assert_eq!(lotte.games_played, 1);
    assert_eq!(lotte.opponents, vec![5]);
    assert_eq!(lotte.color_history, vec![Color::Black]);
    Ok(())
}
