//! Verification code persistence.
//!
//! `issue` supersedes and inserts in one transaction, which is what keeps
//! the "at most one unconsumed code per login" invariant under concurrent
//! password submissions.

use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, TransactionError, TransactionTrait};

use crate::entities::v1::verification_codes::{ActiveModel, Column, Entity, Model};

impl Model {
    /// Persist a fresh code for the user, superseding any unconsumed one.
    pub async fn issue(
        db: &DatabaseConnection,
        user_id: Uuid,
        code: String,
    ) -> Result<Self, TransactionError<DbErr>> {
        db.transaction::<_, Self, DbErr>(move |db| {
            Box::pin(async move {
                Entity::update_many()
                    .col_expr(Column::Consumed, Expr::value(true))
                    .filter(Column::UserId.eq(user_id))
                    .filter(Column::Consumed.eq(false))
                    .exec(db)
                    .await?;

                let model = Model {
                    id: Uuid::new_v4(),
                    user_id,
                    code,
                    issued_at: Utc::now().naive_utc(),
                    consumed: false,
                };

                ActiveModel::from(model).insert(db).await
            })
        })
        .await
    }

    /// The user's single unconsumed code, if any.
    pub async fn find_active<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Consumed.eq(false))
            .order_by_desc(Column::IssuedAt)
            .one(db)
            .await
    }

    /// Mark a code consumed. Returns `false` when the code was already
    /// consumed, so of two concurrent submissions only one wins.
    pub async fn consume<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Consumed, Expr::value(true))
            .filter(Column::Id.eq(id))
            .filter(Column::Consumed.eq(false))
            .exec(db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Test fixture reset: drop every issued code.
    pub async fn purge_all<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
        Entity::delete_many().exec(db).await?;

        Ok(())
    }
}
