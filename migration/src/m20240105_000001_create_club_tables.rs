use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20240105_000001_create_club_tables"
    }
}


#[derive(Iden)]
pub enum Tournament {
    Table,
    TournamentId,
    Name,
    RoundCount,
    IsFinished,
    TournamentType,
    MegaschaakConfig,
}

#[derive(Iden)]
pub enum User {
    Table,
    UserId,
    FirstName,
    LastName,
    Email,
    Phone,
    Rating,
    FideId,
    MaxRating,
    Roles,
    IsActive,
}

#[derive(Iden)]
pub enum TournamentRound {
    Table,
    TournamentId,
    RoundId,
    RoundNumber,
    RoundDate,
}

#[derive(Iden)]
pub enum Game {
    Table,
    GameId,
    TournamentId,
    RoundId,
    WhitePlayerId,
    BlackPlayerId,
    Result,
    WinnerId,
    BoardPosition,
}

#[derive(Iden)]
pub enum Participation {
    Table,
    UserId,
    TournamentId,
    Score,
    TieBreak,
    ColorHistory,
    Opponents,
}


#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
        .create_table(
            sea_query::Table::create()
                .table(Tournament::Table)
                .if_not_exists()
                .col(ColumnDef::new(Tournament::TournamentId).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Tournament::Name).string().not_null())
                .col(ColumnDef::new(Tournament::RoundCount).integer().not_null())
                .col(ColumnDef::new(Tournament::IsFinished).boolean().not_null().default(false))
                .col(ColumnDef::new(Tournament::TournamentType).string().not_null().default("SWISS"))
                .col(ColumnDef::new(Tournament::MegaschaakConfig).json())
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(User::Table)
                .if_not_exists()
                .col(ColumnDef::new(User::UserId).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(User::FirstName).string().not_null())
                .col(ColumnDef::new(User::LastName).string().not_null())
                .col(ColumnDef::new(User::Email).string().not_null().unique_key())
                .col(ColumnDef::new(User::Phone).string())
                .col(ColumnDef::new(User::Rating).integer().not_null().default(0))
                .col(ColumnDef::new(User::FideId).integer())
                .col(ColumnDef::new(User::MaxRating).integer())
                .col(ColumnDef::new(User::Roles).string().not_null().default("[\"MEMBER\"]"))
                .col(ColumnDef::new(User::IsActive).boolean().not_null().default(true))
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(TournamentRound::Table)
                .if_not_exists()
                .col(ColumnDef::new(TournamentRound::TournamentId).integer().not_null())
                .col(ColumnDef::new(TournamentRound::RoundId).integer().not_null())
                .col(ColumnDef::new(TournamentRound::RoundNumber).integer().not_null())
                .col(ColumnDef::new(TournamentRound::RoundDate).date().not_null())
                .primary_key(Index::create().col(TournamentRound::TournamentId).col(TournamentRound::RoundId).primary())
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-round-tournament")
                        .from_tbl(TournamentRound::Table)
                        .from_col(TournamentRound::TournamentId)
                        .to_tbl(Tournament::Table)
                        .to_col(Tournament::TournamentId)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(Game::Table)
                .if_not_exists()
                .col(ColumnDef::new(Game::GameId).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Game::TournamentId).integer().not_null())
                .col(ColumnDef::new(Game::RoundId).integer().not_null())
                .col(ColumnDef::new(Game::WhitePlayerId).integer())
                .col(ColumnDef::new(Game::BlackPlayerId).integer())
                .col(ColumnDef::new(Game::Result).string())
                .col(ColumnDef::new(Game::WinnerId).integer())
                .col(ColumnDef::new(Game::BoardPosition).integer().not_null().default(1))
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-game-round")
                        .from_tbl(Game::Table)
                        .from_col(Game::TournamentId)
                        .from_col(Game::RoundId)
                        .to_tbl(TournamentRound::Table)
                        .to_col(TournamentRound::TournamentId)
                        .to_col(TournamentRound::RoundId)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-game-white-player")
                        .from_tbl(Game::Table)
                        .from_col(Game::WhitePlayerId)
                        .to_tbl(User::Table)
                        .to_col(User::UserId)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-game-black-player")
                        .from_tbl(Game::Table)
                        .from_col(Game::BlackPlayerId)
                        .to_tbl(User::Table)
                        .to_col(User::UserId)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-game-winner")
                        .from_tbl(Game::Table)
                        .from_col(Game::WinnerId)
                        .to_tbl(User::Table)
                        .to_col(User::UserId)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager
        .create_table(
            sea_query::Table::create()
                .table(Participation::Table)
                .if_not_exists()
                .col(ColumnDef::new(Participation::UserId).integer().not_null())
                .col(ColumnDef::new(Participation::TournamentId).integer().not_null())
                .col(ColumnDef::new(Participation::Score).double().not_null().default(0.0))
                .col(ColumnDef::new(Participation::TieBreak).double().not_null().default(0.0))
                .col(ColumnDef::new(Participation::ColorHistory).string().not_null().default("[]"))
                .col(ColumnDef::new(Participation::Opponents).string().not_null().default("[]"))
                .primary_key(Index::create().col(Participation::UserId).col(Participation::TournamentId).primary())
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-participation-user")
                        .from_tbl(Participation::Table)
                        .from_col(Participation::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::UserId)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKeyCreateStatement::new()
                        .name("fk-participation-tournament")
                        .from_tbl(Participation::Table)
                        .from_col(Participation::TournamentId)
                        .to_tbl(Tournament::Table)
                        .to_col(Tournament::TournamentId)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            IndexCreateStatement::new()
            .name("idx-game-round")
            .table(Game::Table)
            .col(Game::TournamentId)
            .col(Game::RoundId)
            .to_owned()
        ).await?;

        return Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Participation::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Game::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(TournamentRound::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Tournament::Table).to_owned()).await?;
        Ok(())
    }
}
