pub use crate::domain::game::{Color, Game, GameInfo, GameResult};
pub use crate::domain::participation::Participation;
pub use crate::domain::player::{Player, PlayerSummary, UserRole};
pub use crate::domain::round::{parse_round_date, NewRound, Round, RoundType, RoundUpdate, RoundWithGames};
pub use crate::domain::standings::{compute_standings, get_standings, recalculate_standings, ScoredGame, Standing, StandingEntry};
pub use crate::domain::tournament::{NewTournament, Tournament, TournamentDetail, TournamentType};
pub use crate::error::{ErrorCode, ServiceError, ServiceResult};
