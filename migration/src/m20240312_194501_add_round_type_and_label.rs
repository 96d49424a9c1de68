use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum TournamentRound {
    Table,
    RoundType,
    Label,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only accepts a single column per ALTER TABLE
        manager
        .alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .add_column(ColumnDef::new(TournamentRound::RoundType).string().not_null().default("REGULAR"))
                .to_owned()
        )
        .await?;

        manager
        .alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .add_column(ColumnDef::new(TournamentRound::Label).string())
                .to_owned()
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
        .alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .drop_column(TournamentRound::Label)
                .to_owned()
        )
        .await?;

        manager
        .alter_table(
            Table::alter()
                .table(TournamentRound::Table)
                .drop_column(TournamentRound::RoundType)
                .to_owned()
        )
        .await
    }
}
