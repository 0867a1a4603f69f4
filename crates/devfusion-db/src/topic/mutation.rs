use devfusion_entity::topic::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        title: String,
        body: String,
        position: i32,
    ) -> Result<Model, DbErr> {
        let topic = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(title),
            body: Set(body),
            position: Set(position),
        };
        topic.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, position, "failed to insert topic");
        })
    }

    /// Replaces title and body, the position is never touched
    pub async fn update_text<C: ConnectionTrait>(conn: &C, id: Uuid, title: String, body: String) -> Result<(), DbErr> {
        let res = Entity::update_many()
            .col_expr(Column::Title, Expr::value(title))
            .col_expr(Column::Body, Expr::value(body))
            .filter(Column::Id.eq(id))
            .exec(conn)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Topic not found".to_owned()));
        }
        Ok(())
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<u64, DbErr> {
        let res = Entity::delete_by_id(id).exec(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to delete topic");
        })?;
        Ok(res.rows_affected)
    }
}
