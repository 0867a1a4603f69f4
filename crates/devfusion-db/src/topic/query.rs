use devfusion_entity::topic::{Column, Entity as TopicEntity, Model as Topic};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// All topics in content order
    pub async fn list_ordered<C: ConnectionTrait>(conn: &C) -> Result<Vec<Topic>, DbErr> {
        TopicEntity::find()
            .order_by_asc(Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load topics");
            })
    }

    /// `(id, title, position)` of all topics in content order, without loading the bodies
    pub async fn list_titles<C: ConnectionTrait>(conn: &C) -> Result<Vec<(Uuid, String, i32)>, DbErr> {
        TopicEntity::find()
            .select_only()
            .columns([Column::Id, Column::Title, Column::Position])
            .order_by_asc(Column::Position)
            .into_tuple()
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load topic titles");
            })
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<Topic>, DbErr> {
        TopicEntity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load topic");
        })
    }

    pub async fn find_by_position<C: ConnectionTrait>(conn: &C, position: i32) -> Result<Option<Topic>, DbErr> {
        TopicEntity::find()
            .filter(Column::Position.eq(position))
            .one(conn)
            .await
    }

    /// The topic with the highest position
    pub async fn find_last<C: ConnectionTrait>(conn: &C) -> Result<Option<Topic>, DbErr> {
        TopicEntity::find()
            .order_by_desc(Column::Position)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load last topic");
            })
    }

    pub async fn count<C: ConnectionTrait>(conn: &C) -> Result<u64, DbErr> {
        TopicEntity::find().count(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to count topics");
        })
    }
}
