use devfusion_entity::user::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

use crate::user::Query;

pub struct Mutation;

impl Mutation {
    /// Inserts a fresh record for `email` unless one exists and returns the stored record.
    pub async fn get_or_create_user<C: ConnectionTrait>(conn: &C, email: &str) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: NotSet,
            email: Set(email.to_owned()),
            progress: Set(0),
            is_pass: Set(false),
            feedback_message: Set(None),
            feedback_rating: Set(None),
        };
        Entity::insert(user)
            .on_conflict(OnConflict::column(Column::Email).do_nothing().to_owned())
            .do_nothing()
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to register user");
            })?;

        Query::find_user_by_email(conn, email)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("user not found after insertion".to_owned()))
    }

    /// Raises the progress of a user to `progress` if it is currently lower.
    /// Returns the number of updated rows.
    pub async fn advance_progress<C: ConnectionTrait>(conn: &C, email: &str, progress: i32) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Progress, Expr::value(progress))
            .filter(Column::Email.eq(email))
            .filter(Column::Progress.lt(progress))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }

    /// Lowers the progress of every user above `max_progress` to `max_progress`.
    pub async fn cap_progress<C: ConnectionTrait>(conn: &C, max_progress: i32) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Progress, Expr::value(max_progress))
            .filter(Column::Progress.gt(max_progress))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to cap user progress");
            })?;
        Ok(res.rows_affected)
    }

    pub async fn mark_passed<C: ConnectionTrait>(conn: &C, email: &str) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::IsPass, Expr::value(true))
            .filter(Column::Email.eq(email))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn set_feedback<C: ConnectionTrait>(
        conn: &C,
        email: &str,
        message: Option<String>,
        rating: i32,
    ) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::FeedbackMessage, Expr::value(message))
            .col_expr(Column::FeedbackRating, Expr::value(rating))
            .filter(Column::Email.eq(email))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to store feedback");
            })?;
        Ok(res.rows_affected)
    }
}
