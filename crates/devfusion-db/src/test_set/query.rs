use devfusion_entity::mcq::{self, Model as Mcq};
use devfusion_entity::test_set::{Column, Entity as TestSetEntity, Model as TestSet};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn list<C: ConnectionTrait>(conn: &C) -> Result<Vec<TestSet>, DbErr> {
        TestSetEntity::find()
            .order_by_asc(Column::Title)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load test sets");
            })
    }

    /// All test sets with their questions, questions in position order
    pub async fn list_with_mcqs<C: ConnectionTrait>(conn: &C) -> Result<Vec<(TestSet, Vec<Mcq>)>, DbErr> {
        let mut tests = TestSetEntity::find()
            .find_with_related(mcq::Entity)
            .order_by_asc(Column::Title)
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load test sets with questions");
            })?;
        for (_, mcqs) in &mut tests {
            mcqs.sort_by_key(|mcq| mcq.position);
        }
        Ok(tests)
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<TestSet>, DbErr> {
        TestSetEntity::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load test set");
        })
    }

    pub async fn find_mcqs<C: ConnectionTrait>(conn: &C, test_set_id: Uuid) -> Result<Vec<Mcq>, DbErr> {
        mcq::Entity::find()
            .filter(mcq::Column::TestSetId.eq(test_set_id))
            .order_by_asc(mcq::Column::Position)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load questions");
            })
    }

    pub async fn find_with_mcqs<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<(TestSet, Vec<Mcq>)>, DbErr> {
        let Some(test_set) = Self::find_by_id(conn, id).await? else {
            return Ok(None);
        };
        let mcqs = Self::find_mcqs(conn, id).await?;
        Ok(Some((test_set, mcqs)))
    }

    /// All test sets currently flagged as certification. Holds at most one entry
    /// as long as the single certification index exists.
    pub async fn find_certification<C: ConnectionTrait>(conn: &C) -> Result<Vec<TestSet>, DbErr> {
        TestSetEntity::find()
            .filter(Column::IsCertification.eq(true))
            .all(conn)
            .await
    }
}
