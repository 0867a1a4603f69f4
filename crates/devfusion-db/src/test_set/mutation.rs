use devfusion_entity::mcq;
use devfusion_entity::test_set::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Inserts a test set without the certification flag. The flag is only ever
    /// raised through [`Mutation::set_certification`].
    pub async fn insert<C: ConnectionTrait>(conn: &C, title: String, passing_percentage: f64) -> Result<Model, DbErr> {
        let test_set = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title),
            is_certification: Set(false),
            passing_percentage: Set(passing_percentage),
        };
        test_set.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to insert test set");
        })
    }

    pub async fn update_fields<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        title: String,
        passing_percentage: f64,
    ) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Title, Expr::value(title))
            .col_expr(Column::PassingPercentage, Expr::value(passing_percentage))
            .filter(Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }

    /// Drops all questions of a test set and stores `mcqs` in their place
    pub async fn replace_mcqs<C: ConnectionTrait>(
        conn: &C,
        test_set_id: Uuid,
        mcqs: Vec<mcq::ActiveModel>,
    ) -> Result<(), DbErr> {
        mcq::Entity::delete_many()
            .filter(mcq::Column::TestSetId.eq(test_set_id))
            .exec(conn)
            .await?;
        if mcqs.is_empty() {
            return Ok(());
        }
        mcq::Entity::insert_many(mcqs)
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to insert questions");
            })?;
        Ok(())
    }

    /// Clears the certification flag on every test set except `keep`
    pub async fn unset_certification_except<C: ConnectionTrait>(conn: &C, keep: Uuid) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::IsCertification, Expr::value(false))
            .filter(Column::IsCertification.eq(true))
            .filter(Column::Id.ne(keep))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn set_certification<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
        is_certification: bool,
    ) -> Result<u64, DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::IsCertification, Expr::value(is_certification))
            .filter(Column::Id.eq(id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }

    /// Removes a test set together with its questions
    pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<u64, DbErr> {
        mcq::Entity::delete_many()
            .filter(mcq::Column::TestSetId.eq(id))
            .exec(conn)
            .await?;
        let res = Entity::delete_by_id(id).exec(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to delete test set");
        })?;
        Ok(res.rows_affected)
    }
}
