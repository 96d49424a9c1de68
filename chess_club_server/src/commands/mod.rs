use crate::{config::Config, state::AppState};
use chess_club_entities::prelude::recalculate_standings;
use tracing::info;

#[derive(clap::Subcommand)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Rebuild the participations of a tournament from its game results
    RecalculateStandings {
        tournament_id: i32
    },
}

impl Command {
    pub async fn run(&self, config: &Config, app_state: AppState) -> anyhow::Result<()> {
        match self {
            Command::Serve => {
                crate::serve(config, app_state).await
            }
            Command::RecalculateStandings { tournament_id } => {
                let standings = recalculate_standings(&app_state.db, *tournament_id).await?;
                info!("Recalculated standings of tournament {}", tournament_id);
                for entry in standings {
                    println!(
                        "{:>3}. {} {} ({}) {} / {}",
                        entry.rank, entry.first_name, entry.last_name, entry.rating, entry.score, entry.tie_break
                    );
                }
                Ok(())
            }
        }
    }
}
