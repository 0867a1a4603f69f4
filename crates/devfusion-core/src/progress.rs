use devfusion_db::{topic, user};
use devfusion_model::progress::MAX_PROGRESS;
use devfusion_model::topic::{Topic, TopicSelection, TopicSummary};
use devfusion_model_tools::convert::TryIntoModel;
use num_traits::ToPrimitive;
use sea_orm::DatabaseConnection;

use crate::error::{CoreError, Entity, ValidationError};
use crate::session::UserSession;

/// Previous and next content positions around `selected` in a sequence of `total` topics
#[must_use]
pub fn neighbours(selected: u32, total: u32) -> (Option<u32>, Option<u32>) {
    let prev = (selected > 1).then(|| selected - 1);
    let next = (selected < total).then(|| selected + 1);
    (prev, next)
}

#[derive(Debug, Clone)]
pub struct ProgressEngine {
    conn: DatabaseConnection,
}

impl ProgressEngine {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Unlocks `requested` if it lies ahead of the user's progress and returns the
    /// resulting progress. Progress never moves backwards.
    pub async fn advance_or_fetch(&self, session: &UserSession, requested: Option<u32>) -> Result<u32, CoreError> {
        let user = user::Query::find_user_by_email(&self.conn, &session.email)
            .await?
            .ok_or(CoreError::NotFound(Entity::User))?;
        let current = user.progress.to_u32().unwrap_or_default();

        if let Some(requested) = requested {
            self.validate_order(requested).await?;
            if requested > current {
                let order = requested.to_i32().ok_or(ValidationError::OrderOutOfRange(requested))?;
                let updated = user::Mutation::advance_progress(&self.conn, &session.email, order).await?;
                if updated == 0 {
                    // Another request moved the user even further ahead
                    return self.current_progress(session).await;
                }
                tracing::debug!(email = %session.email, progress = requested, "advanced progress");
                return Ok(requested);
            }
        }

        // Without content there is nothing to unlock, progress stays at 0
        if current == 0 && topic::Query::count(&self.conn).await? > 0 {
            user::Mutation::advance_progress(&self.conn, &session.email, 1).await?;
            tracing::debug!(email = %session.email, "initialized progress on first visit");
            return Ok(1);
        }
        Ok(current)
    }

    /// Resolves the topic to show for a navigation request, advancing progress on the way
    pub async fn select_topic(&self, session: &UserSession, requested: Option<u32>) -> Result<TopicSelection, CoreError> {
        let progress = self.advance_or_fetch(session, requested).await?;
        let selected = requested.unwrap_or(progress);

        let content = topic::Query::list_titles(&self.conn)
            .await?
            .into_iter()
            .map(TryIntoModel::<TopicSummary>::try_into_model)
            .collect::<Result<Vec<_>, _>>()?;
        let total = content.len().to_u32().unwrap_or(u32::MAX);

        let topic = match selected.to_i32() {
            Some(position) => topic::Query::find_by_position(&self.conn, position).await?,
            None => None,
        };
        let topic: Option<Topic> = topic.map(TryIntoModel::try_into_model).transpose()?;
        let (prev, next) = neighbours(selected, total);

        Ok(TopicSelection {
            content,
            topic,
            selected,
            prev,
            next,
            progress,
        })
    }

    async fn validate_order(&self, requested: u32) -> Result<(), CoreError> {
        if !(1..=MAX_PROGRESS).contains(&requested) {
            return Err(ValidationError::OrderOutOfRange(requested).into());
        }
        let available = topic::Query::count(&self.conn).await?.to_u32().unwrap_or(u32::MAX);
        if requested > available {
            return Err(ValidationError::OrderBeyondContent { requested, available }.into());
        }
        Ok(())
    }

    async fn current_progress(&self, session: &UserSession) -> Result<u32, CoreError> {
        let user = user::Query::find_user_by_email(&self.conn, &session.email)
            .await?
            .ok_or(CoreError::NotFound(Entity::User))?;
        Ok(user.progress.to_u32().unwrap_or_default())
    }
}
