use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(User::Table)
            .col(ColumnDef::new(User::Id).uuid().not_null().primary_key())
            .col(ColumnDef::new(User::Login).string().not_null().unique_key())
            .col(ColumnDef::new(User::Password).string().not_null())
            .col(
                ColumnDef::new(User::FailedAttempts)
                    .integer()
                    .not_null()
                    .default(0),
            )
            .col(
                ColumnDef::new(User::Blocked)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(User::CreatedAt).timestamp().not_null())
            .col(ColumnDef::new(User::UpdatedAt).timestamp().not_null())
            .take();

        manager.create_table(table).await?;

        manager
            .create_index(
                Index::create()
                    .table(User::Table)
                    .col(User::Login)
                    .name("idx_users_login")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(User::Table)
                    .col(User::Blocked)
                    .name("idx_users_blocked")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Login,
    Password,
    FailedAttempts,
    Blocked,
    CreatedAt,
    UpdatedAt,
}
