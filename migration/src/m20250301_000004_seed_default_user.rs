use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher as Argon2Hasher, SaltString},
};
use rand::rngs::OsRng;
use sea_orm::prelude::Uuid;
use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

const DEFAULT_LOGIN: &str = "vasya";
const DEFAULT_PASSWORD: &str = "qwerty123";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let params = Params::new(
            65536, // 64 MB memory cost
            3,     // 3 iterations
            4,     // 4 threads parallelism
            Some(32),
        )
        .expect("Invalid Argon2 parameters");

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(DEFAULT_PASSWORD.as_bytes(), &salt)
            .expect("Failed to hash password")
            .to_string();

        let now = chrono::Utc::now().naive_utc();

        manager
            .exec_stmt(
                Query::insert()
                    .into_table(User::Table)
                    .columns(vec![
                        User::Id,
                        User::Login,
                        User::Password,
                        User::FailedAttempts,
                        User::Blocked,
                        User::CreatedAt,
                        User::UpdatedAt,
                    ])
                    .values_panic(vec![
                        Uuid::from_u128(0).into(),
                        DEFAULT_LOGIN.into(),
                        password_hash.into(),
                        0.into(),
                        false.into(),
                        now.into(),
                        now.into(),
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(User::Table)
                    .and_where(Expr::col(User::Login).eq(DEFAULT_LOGIN))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
