use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::state::AppState;

pub mod commands;
pub mod config;
pub mod db;
pub mod game;
pub mod patch;
pub mod players;
pub mod response;
pub mod round;
pub mod state;
pub mod tournament;


fn cors_layer(config: &Config) -> CorsLayer {
    let origin = match &config.cors_allowed_origin {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(e) => {
                warn!("Ignoring invalid cors_allowed_origin '{}': {}", origin, e);
                AllowOrigin::from(Any)
            }
        },
        None => AllowOrigin::from(Any)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

pub async fn app_with_state(state: AppState) -> Router {
    let api = Router::new()
        .merge(round::router())
        .merge(tournament::router())
        .merge(game::router())
        .merge(players::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

pub async fn serve(config: &Config, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let app = app_with_state(state).await;

    info!("Listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
