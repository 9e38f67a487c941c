use chrono::{NaiveDateTime, Utc};
use sea_orm::prelude::*;
use sea_orm::Condition;

use crate::entities::v1::sessions::{ActiveModel, Column, Entity, Model};
use crate::entities::v1::users;

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        user_id: Uuid,
        expired_at: Option<NaiveDateTime>,
    ) -> Result<Self, DbErr> {
        let session = Model {
            id: Uuid::new_v4(),
            user_id,
            expired_at,
        };

        ActiveModel::from(session).insert(db).await
    }

    /// Resolve a bearer token to its user, ignoring expired sessions.
    pub async fn user<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .inner_join(Entity)
            .filter(Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(Column::ExpiredAt.gt(Utc::now().naive_utc()))
                    .add(Column::ExpiredAt.is_null()),
            )
            .one(db)
            .await
    }

    /// Drop every session of a user.
    pub async fn logout<C: ConnectionTrait>(db: &C, user_id: Uuid) -> Result<(), DbErr> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(db)
            .await?;

        Ok(())
    }
}
