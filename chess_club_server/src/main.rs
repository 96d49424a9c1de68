use clap::Parser;
use tracing_subscriber::{prelude::*, EnvFilter};

use chess_club_server::{commands::Command, config::read_config, state::AppState};


#[derive(Parser)]
#[command(name = "chess_club_server", about = "Tournament and round administration for the chess club")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = read_config();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_new(&config.logging_config)?)
        .init();

    let state = AppState::new(config.clone()).await?;
    cli.command.unwrap_or(Command::Serve).run(&config, state).await
}
