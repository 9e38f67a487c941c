use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerificationCode::Table)
                    .col(
                        ColumnDef::new(VerificationCode::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VerificationCode::UserId).uuid().not_null())
                    .col(ColumnDef::new(VerificationCode::Code).string().not_null())
                    .col(
                        ColumnDef::new(VerificationCode::IssuedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VerificationCode::Consumed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(VerificationCode::Table, VerificationCode::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(VerificationCode::Table)
                    .col(VerificationCode::UserId)
                    .name("idx_verification_codes_user_id")
                    .take(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(VerificationCode::Table)
                    .col(VerificationCode::Consumed)
                    .name("idx_verification_codes_consumed")
                    .take(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(VerificationCode::Table).take())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VerificationCode {
    #[sea_orm(iden = "verification_codes")]
    Table,
    Id,
    UserId,
    Code,
    IssuedAt,
    Consumed,
}
