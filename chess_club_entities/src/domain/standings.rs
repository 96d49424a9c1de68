use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use sea_orm::{prelude::*, TransactionTrait};
use serde::{Serialize, Deserialize};

use crate::error::ServiceResult;
use crate::schema;

use super::game::{Color, Game, GameResult};
use super::participation::Participation;
use super::round::Round;
use super::tournament::Tournament;


/// A finished game reduced to what the standings need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredGame {
    pub white: Option<i32>,
    pub black: Option<i32>,
    pub result: GameResult,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Standing {
    pub score: f64,
    pub tie_break: f64,
    pub color_history: Vec<Color>,
    pub opponents: Vec<i32>,
}

/// Games must be passed in playing order, colour histories and opponent
/// lists follow it.
pub fn compute_standings(games: &[ScoredGame]) -> BTreeMap<i32, Standing> {
    let mut standings: BTreeMap<i32, Standing> = BTreeMap::new();

    for game in games {
        let (white_points, black_points) = game.result.points();
        match (game.white, game.black) {
            (Some(white), Some(black)) => {
                let entry = standings.entry(white).or_default();
                entry.score += white_points;
                entry.color_history.push(Color::White);
                entry.opponents.push(black);

                let entry = standings.entry(black).or_default();
                entry.score += black_points;
                entry.color_history.push(Color::Black);
                entry.opponents.push(white);
            },
            (Some(white), None) => {
                standings.entry(white).or_default().score += white_points;
            },
            (None, Some(black)) => {
                standings.entry(black).or_default().score += black_points;
            },
            (None, None) => {}
        }
    }

    // Buchholz
    let scores = standings.iter().map(|(id, s)| (*id, s.score)).collect::<HashMap<_, _>>();
    for standing in standings.values_mut() {
        standing.tie_break = standing.opponents.iter().map(|o| scores.get(o).copied().unwrap_or(0.0)).sum();
    }

    standings
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub rank: usize,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub score: f64,
    pub tie_break: f64,
    /// Games against an opponent. Byes add to `score` only.
    pub games_played: usize,
    pub color_history: Vec<Color>,
    pub opponents: Vec<i32>,
}

pub async fn get_standings<C>(db: &C, tournament_id: i32) -> ServiceResult<Vec<StandingEntry>> where C: ConnectionTrait {
    Tournament::get(db, tournament_id).await?;

    let rows = schema::participation::Entity::find()
        .filter(schema::participation::Column::TournamentId.eq(tournament_id))
        .find_also_related(schema::user::Entity)
        .all(db)
        .await?;

    let mut entries = rows.into_iter().map(|(participation, user)| -> ServiceResult<StandingEntry> {
        let user = user.ok_or_else(|| DbErr::RecordNotFound(format!("User {}", participation.user_id)))?;
        let participation = Participation::try_from(participation)?;
        Ok(StandingEntry {
            rank: 0,
            user_id: participation.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            rating: user.rating,
            score: participation.score,
            tie_break: participation.tie_break,
            games_played: participation.color_history.len(),
            color_history: participation.color_history,
            opponents: participation.opponents,
        })
    }).collect::<ServiceResult<Vec<_>>>()?;

    entries.sort_by(|a, b| {
        OrderedFloat(b.score).cmp(&OrderedFloat(a.score))
            .then_with(|| OrderedFloat(b.tie_break).cmp(&OrderedFloat(a.tie_break)))
            .then_with(|| a.last_name.cmp(&b.last_name))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }

    Ok(entries)
}

/// Rebuilds every participation of the tournament from its game results.
pub async fn recalculate_standings<C>(db: &C, tournament_id: i32) -> ServiceResult<Vec<StandingEntry>> where C: ConnectionTrait + TransactionTrait {
    let transaction = db.begin().await?;

    Tournament::get(&transaction, tournament_id).await?;

    let round_order = Round::get_all_in_tournament(&transaction, tournament_id).await?
        .into_iter()
        .map(|r| (r.round_id, (r.round_number, r.round_id)))
        .collect::<HashMap<_, _>>();

    let scored_games = Game::get_all_in_tournament(&transaction, tournament_id).await?
        .into_iter()
        .filter_map(|g| {
            let order = round_order.get(&g.round_id).copied().unwrap_or((i32::MAX, g.round_id));
            g.result.map(|result| (order, g.board_position, ScoredGame { white: g.white_player_id, black: g.black_player_id, result }))
        })
        .sorted_by_key(|(order, board, _)| (*order, *board))
        .map(|(_, _, game)| game)
        .collect_vec();

    let standings = compute_standings(&scored_games);

    let existing = Participation::get_all_in_tournament(&transaction, tournament_id).await?;
    let existing_ids = existing.iter().map(|p| p.user_id).collect::<HashSet<_>>();

    for participation in existing.iter().filter(|p| !standings.contains_key(&p.user_id)) {
        let reset = Participation::empty(participation.user_id, tournament_id);
        reset.to_active_model()?.update(&transaction).await?;
    }

    for (user_id, standing) in standings.into_iter() {
        let participation = Participation {
            user_id,
            tournament_id,
            score: standing.score,
            tie_break: standing.tie_break,
            color_history: standing.color_history,
            opponents: standing.opponents,
        };
        let model = participation.to_active_model()?;
        if existing_ids.contains(&user_id) {
            model.update(&transaction).await?;
        }
        else {
            schema::participation::Entity::insert(model).exec_without_returning(&transaction).await?;
        }
    }

    let entries = get_standings(&transaction, tournament_id).await?;
    transaction.commit().await?;

    Ok(entries)
}


#[cfg(test)]
mod tests {
    use super::{compute_standings, ScoredGame};
    use crate::domain::game::{Color, GameResult};

    fn game(white: Option<i32>, black: Option<i32>, result: GameResult) -> ScoredGame {
        ScoredGame { white, black, result }
    }

    #[test]
    fn test_points_and_buchholz() {
        let standings = compute_standings(&[
            game(Some(1), Some(2), GameResult::WhiteWins),
            game(Some(3), Some(4), GameResult::Draw),
            game(Some(2), Some(3), GameResult::BlackWins),
            game(Some(4), Some(1), GameResult::Draw),
        ]);

        assert_eq!(standings[&1].score, 1.5);
        assert_eq!(standings[&2].score, 0.0);
        assert_eq!(standings[&3].score, 1.5);
        assert_eq!(standings[&4].score, 1.0);

        // 1 played 2 (0.0) and 4 (1.0)
        assert_eq!(standings[&1].tie_break, 1.0);
        // 2 played 1 (1.5) and 3 (1.5)
        assert_eq!(standings[&2].tie_break, 3.0);
        assert_eq!(standings[&3].tie_break, 1.0);
        assert_eq!(standings[&4].tie_break, 3.0);
    }

    #[test]
    fn test_color_history_and_opponents_follow_game_order() {
        let standings = compute_standings(&[
            game(Some(1), Some(2), GameResult::WhiteWins),
            game(Some(2), Some(1), GameResult::Draw),
        ]);

        assert_eq!(standings[&1].color_history, vec![Color::White, Color::Black]);
        assert_eq!(standings[&2].color_history, vec![Color::Black, Color::White]);
        assert_eq!(standings[&1].opponents, vec![2, 2]);
    }

    #[test]
    fn test_bye_scores_without_opponent() {
        let standings = compute_standings(&[
            game(Some(5), None, GameResult::WhiteWins),
        ]);

        assert_eq!(standings[&5].score, 1.0);
        assert!(standings[&5].color_history.is_empty());
        assert!(standings[&5].opponents.is_empty());
        assert_eq!(standings[&5].tie_break, 0.0);
    }

    #[test]
    fn test_forfeits() {
        let standings = compute_standings(&[
            game(Some(1), Some(2), GameResult::WhiteWinsByForfeit),
            game(Some(3), Some(4), GameResult::DoubleForfeit),
        ]);

        assert_eq!(standings[&1].score, 1.0);
        assert_eq!(standings[&2].score, 0.0);
        assert_eq!(standings[&3].score, 0.0);
        assert_eq!(standings[&4].score, 0.0);
        assert_eq!(standings[&4].opponents, vec![3]);
    }

    #[test]
    fn test_no_games() {
        assert!(compute_standings(&[]).is_empty());
    }
}
