use devfusion_db::user;
use devfusion_model::feedback::{Feedback, MAX_RATING, MIN_RATING, RatingCount, RatingSummary};
use devfusion_model_tools::convert::TryIntoModel;
use num_traits::ToPrimitive;
use sea_orm::DatabaseConnection;

use crate::error::{CoreError, Entity, ValidationError};

pub const DEFAULT_REVIEW_LIMIT: u64 = 5;

fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}

/// Totals and weighted average of per rating counts
#[must_use]
pub fn summarize(per_rating: Vec<RatingCount>) -> RatingSummary {
    let total_reviews: u64 = per_rating.iter().map(|count| count.count).sum();
    let weighted: u64 = per_rating
        .iter()
        .map(|count| u64::from(count.rating) * count.count)
        .sum();
    let average_rating = if total_reviews == 0 {
        0.0
    } else {
        weighted.to_f64().unwrap_or_default() / total_reviews.to_f64().unwrap_or(1.0)
    };
    RatingSummary {
        per_rating,
        average_rating,
        total_reviews,
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackStore {
    conn: DatabaseConnection,
}

impl FeedbackStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Stores the feedback of a user, replacing any earlier one
    pub async fn upsert_feedback(&self, email: &str, feedback: Feedback) -> Result<Feedback, CoreError> {
        validate_rating(feedback.rating)?;
        let message = feedback.message.filter(|message| !message.trim().is_empty());
        let updated =
            user::Mutation::set_feedback(&self.conn, email, message.clone(), i32::from(feedback.rating)).await?;
        if updated == 0 {
            return Err(CoreError::NotFound(Entity::User));
        }
        tracing::debug!(%email, rating = feedback.rating, "stored feedback");
        Ok(Feedback {
            message,
            rating: feedback.rating,
        })
    }

    pub async fn fetch_feedback(&self, email: &str) -> Result<Feedback, CoreError> {
        let user = user::Query::find_user_by_email(&self.conn, email)
            .await?
            .ok_or(CoreError::NotFound(Entity::User))?;
        let feedback: Option<Feedback> = user.try_into_model()?;
        feedback.ok_or(CoreError::NotFound(Entity::Feedback))
    }

    pub async fn rating_summary(&self) -> Result<RatingSummary, CoreError> {
        let per_rating = user::Query::rating_counts(&self.conn)
            .await?
            .into_iter()
            .map(TryIntoModel::try_into_model)
            .collect::<Result<_, _>>()?;
        Ok(summarize(per_rating))
    }

    /// Newest reviews first, optionally only those with the given rating
    pub async fn recent_reviews(&self, limit: Option<u64>, rating: Option<u8>) -> Result<Vec<Feedback>, CoreError> {
        if let Some(rating) = rating {
            validate_rating(rating)?;
        }
        let users = user::Query::recent_reviews(
            &self.conn,
            limit.unwrap_or(DEFAULT_REVIEW_LIMIT),
            rating.map(i32::from),
        )
        .await?;

        let mut reviews = Vec::with_capacity(users.len());
        for user in users {
            let review: Option<Feedback> = user.try_into_model()?;
            reviews.extend(review);
        }
        Ok(reviews)
    }
}
