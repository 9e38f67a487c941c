//! Credential store lookups and the lockout policy.
//!
//! Counter mutations run as in-database update expressions, not
//! read-then-write, so concurrent attempts for the same login never lose
//! an increment.

use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{TransactionError, TransactionTrait};

use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};
use crate::responses::v1::user::User;

impl Model {
    pub async fn find_by_login<C, T>(db: &C, login: T) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
        T: ToString,
    {
        Entity::find()
            .filter(Column::Login.eq(login.to_string()))
            .one(db)
            .await
    }

    pub async fn login_exists<C, T>(db: &C, login: T) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
        T: ToString,
    {
        let count = Entity::find()
            .filter(Column::Login.eq(login.to_string()))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn store<C: ConnectionTrait>(
        db: &C,
        login: String,
        password_hash: String,
    ) -> Result<Self, DbErr> {
        let now = Utc::now().naive_utc();
        let user = Model {
            id: Uuid::new_v4(),
            login,
            password: password_hash,
            failed_attempts: 0,
            blocked: false,
            created_at: now,
            updated_at: now,
        };

        ActiveModel::from(user).insert(db).await
    }

    /// Count one real failed password attempt.
    ///
    /// The increment and the threshold comparison both run in the database,
    /// so two concurrent failures count as two. The account becomes blocked
    /// the moment the counter reaches the threshold; the caller observes the
    /// block on the next attempt, not on the one that crossed it.
    pub async fn record_failure(
        db: &DatabaseConnection,
        id: Uuid,
        threshold: u32,
    ) -> Result<Self, TransactionError<DbErr>> {
        db.transaction::<_, Self, DbErr>(move |db| {
            Box::pin(async move {
                Entity::update_many()
                    .col_expr(
                        Column::FailedAttempts,
                        Expr::col(Column::FailedAttempts).add(1),
                    )
                    .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
                    .filter(Column::Id.eq(id))
                    .exec(db)
                    .await?;

                // Never unsets: a blocked account stays blocked.
                Entity::update_many()
                    .col_expr(Column::Blocked, Expr::value(true))
                    .filter(Column::Id.eq(id))
                    .filter(Column::FailedAttempts.gte(threshold as i32))
                    .exec(db)
                    .await?;

                Entity::find_by_id(id)
                    .one(db)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))
            })
        })
        .await
    }

    /// Reset the attempt counter after a correct password.
    ///
    /// Never clears `blocked`: a blocked account stays blocked no matter
    /// what password is submitted.
    pub async fn record_success<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Self, DbErr> {
        Entity::update_many()
            .col_expr(Column::FailedAttempts, Expr::value(0))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;

        Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))
    }

    /// Explicit administrative reset; the only way out of the blocked state.
    pub async fn unblock<C: ConnectionTrait>(
        db: &C,
        login: String,
    ) -> Result<Option<Self>, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::FailedAttempts, Expr::value(0))
            .col_expr(Column::Blocked, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(Column::Login.eq(login.clone()))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Self::find_by_login(db, login).await
    }
}

impl From<Model> for User {
    fn from(val: Model) -> Self {
        User {
            login: val.login,
            failed_attempts: val.failed_attempts,
            blocked: val.blocked,
        }
    }
}
