use devfusion_db::topic;
use devfusion_db::util::{FlattenTransactionResultExt, InspectTransactionError};
use devfusion_entity::topic::Model as TopicModel;
use devfusion_model::progress::MAX_PROGRESS;
use devfusion_model::topic::{DeletedTopic, NewTopic, Topic, TopicSummary};
use devfusion_model_tools::convert::TryIntoModel;
use num_traits::ToPrimitive;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use std::error::Error;
use uuid::Uuid;

use crate::error::{CoreError, Entity, ValidationError};
use crate::recap::recap;

fn validate(new_topic: &NewTopic) -> Result<(), ValidationError> {
    if new_topic.title.trim().is_empty() || new_topic.body.trim().is_empty() {
        return Err(ValidationError::EmptyTopic);
    }
    Ok(())
}

/// Deletes `last` and caps user progress to the remaining content length
async fn delete_tail<C: ConnectionTrait>(conn: &C, last: TopicModel) -> Result<DeletedTopic, CoreError> {
    topic::Mutation::delete(conn, last.id).await?;
    let new_max = last.position.saturating_sub(1).to_u32().unwrap_or_default();
    let recap = recap(conn, new_max).await?;
    Ok(DeletedTopic {
        topic: last.try_into_model()?,
        recap,
    })
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    conn: DatabaseConnection,
}

impl ContentStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_topics(&self) -> Result<Vec<TopicSummary>, CoreError> {
        let topics = topic::Query::list_titles(&self.conn)
            .await?
            .into_iter()
            .map(TryIntoModel::try_into_model)
            .collect::<Result<_, _>>()?;
        Ok(topics)
    }

    pub async fn list_content(&self) -> Result<Vec<Topic>, CoreError> {
        let topics = topic::Query::list_ordered(&self.conn)
            .await?
            .into_iter()
            .map(TryIntoModel::try_into_model)
            .collect::<Result<_, _>>()?;
        Ok(topics)
    }

    pub async fn get_topic(&self, id: Uuid) -> Result<Topic, CoreError> {
        let topic = topic::Query::find_by_id(&self.conn, id)
            .await?
            .ok_or(CoreError::NotFound(Entity::Topic))?;
        Ok(topic.try_into_model()?)
    }

    pub async fn topic_count(&self) -> Result<u32, CoreError> {
        Ok(topic::Query::count(&self.conn).await?.to_u32().unwrap_or(u32::MAX))
    }

    /// Appends a topic after the current last one
    pub async fn add_topic(&self, new_topic: NewTopic) -> Result<Topic, CoreError> {
        validate(&new_topic)?;
        let res = self
            .conn
            .transaction::<_, TopicModel, CoreError>(|txn| {
                Box::pin(async move {
                    let position = topic::Query::find_last(txn)
                        .await?
                        .map_or(1, |last| last.position.saturating_add(1));
                    if position.to_u32().is_none_or(|position| position > MAX_PROGRESS) {
                        return Err(ValidationError::ContentFull.into());
                    }
                    topic::Mutation::insert(txn, new_topic.title, new_topic.body, position)
                        .await
                        .map_err(CoreError::from_write)
                })
            })
            .await;
        let created = res
            .inspect_transaction_err(|error| {
                if matches!(error, CoreError::Database(_)) {
                    tracing::error!(error = error as &dyn Error, "failed to add topic");
                }
            })
            .flatten_res()?;
        tracing::info!(topic_id = %created.id, position = created.position, "added topic");
        Ok(created.try_into_model()?)
    }

    /// Replaces title and body, the position stays
    pub async fn update_topic(&self, id: Uuid, new_topic: NewTopic) -> Result<Topic, CoreError> {
        validate(&new_topic)?;
        match topic::Mutation::update_text(&self.conn, id, new_topic.title, new_topic.body).await {
            Ok(()) => {}
            Err(DbErr::RecordNotFound(_)) => return Err(CoreError::NotFound(Entity::Topic)),
            Err(error) => return Err(error.into()),
        }
        self.get_topic(id).await
    }

    /// Deletes the topic with the highest position and caps user progress in the same transaction
    pub async fn delete_last_topic(&self) -> Result<DeletedTopic, CoreError> {
        let res = self
            .conn
            .transaction::<_, DeletedTopic, CoreError>(|txn| {
                Box::pin(async move {
                    let last = topic::Query::find_last(txn)
                        .await?
                        .ok_or(CoreError::NotFound(Entity::Topic))?;
                    delete_tail(txn, last).await
                })
            })
            .await;
        let deleted = res
            .inspect_transaction_err(|error| {
                if matches!(error, CoreError::Database(_)) {
                    tracing::error!(error = error as &dyn Error, "failed to delete last topic");
                }
            })
            .flatten_res()?;
        tracing::info!(topic_id = %deleted.topic.id, updated_count = deleted.recap.updated_count, "deleted topic");
        Ok(deleted)
    }

    /// Deletes topic `id`, which has to be the last one. Content is never renumbered.
    pub async fn delete_topic(&self, id: Uuid) -> Result<DeletedTopic, CoreError> {
        let res = self
            .conn
            .transaction::<_, DeletedTopic, CoreError>(|txn| {
                Box::pin(async move {
                    match topic::Query::find_last(txn).await? {
                        Some(last) if last.id == id => delete_tail(txn, last).await,
                        _ => match topic::Query::find_by_id(txn, id).await? {
                            Some(_) => Err(ValidationError::NotLastTopic.into()),
                            None => Err(CoreError::NotFound(Entity::Topic)),
                        },
                    }
                })
            })
            .await;
        let deleted = res
            .inspect_transaction_err(|error| {
                if matches!(error, CoreError::Database(_)) {
                    tracing::error!(error = error as &dyn Error, "failed to delete topic");
                }
            })
            .flatten_res()?;
        tracing::info!(topic_id = %id, updated_count = deleted.recap.updated_count, "deleted topic");
        Ok(deleted)
    }
}
