use devfusion_entity::user::{Column, Entity as UserEntity, Model as User};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_user_by_email<C: ConnectionTrait>(conn: &C, email: &str) -> Result<Option<User>, DbErr> {
        UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading user");
            })
    }

    /// Number of users per feedback rating, ordered by rating. Users without a rating are skipped.
    pub async fn rating_counts<C: ConnectionTrait>(conn: &C) -> Result<Vec<(i32, i64)>, DbErr> {
        UserEntity::find()
            .select_only()
            .column(Column::FeedbackRating)
            .column_as(Expr::col(Column::Id).count(), "count")
            .filter(Column::FeedbackRating.is_not_null())
            .group_by(Column::FeedbackRating)
            .order_by_asc(Column::FeedbackRating)
            .into_tuple()
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to count ratings");
            })
    }

    /// Users with feedback, newest records first
    pub async fn recent_reviews<C: ConnectionTrait>(
        conn: &C,
        limit: u64,
        rating: Option<i32>,
    ) -> Result<Vec<User>, DbErr> {
        let query = match rating {
            Some(rating) => UserEntity::find().filter(Column::FeedbackRating.eq(rating)),
            None => UserEntity::find().filter(Column::FeedbackRating.is_not_null()),
        };
        query
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load recent reviews");
            })
    }
}
