use std::sync::Arc;
use axum::extract::FromRef;
use db::DatabaseConfig;
use migration::MigratorTrait;

use crate::{config::Config, db};
use sea_orm::prelude::*;


#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<AppState, DbErr> {
        let db = db::set_up_db(
            DatabaseConfig::new(config.db_url.clone())
        ).await?;
        Self::new_with_db_and_config(db, config).await
    }

    pub async fn new_with_db(db: DatabaseConnection) -> Result<AppState, DbErr> {
        Self::new_with_db_and_config(db, Config::default()).await
    }

    async fn new_with_db_and_config(db: DatabaseConnection, config: Config) -> Result<AppState, DbErr> {
        migration::Migrator::up(&db, None).await?;
        Ok(AppState {
            db,
            config: Arc::new(config),
        })
    }

    pub async fn new_test_app() -> AppState {
        let db = db::set_up_db(
            DatabaseConfig::new(
                "sqlite::memory:".into(),
            )
        ).await.expect("Failed to set up database");
        Self::new_with_db(db).await.expect("Failed to run migrations")
    }
}

impl FromRef<AppState> for DatabaseConnection {
    fn from_ref(app_state: &AppState) -> DatabaseConnection {
        app_state.db.clone()
    }
}
