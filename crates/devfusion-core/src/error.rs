use devfusion_db::util::UniqueViolation;
use devfusion_model::feedback::{MAX_RATING, MIN_RATING};
use devfusion_model::progress::MAX_PROGRESS;
use sea_orm::DbErr;
use strum::{AsRefStr, Display};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Entity {
    User,
    Topic,
    TestSet,
    Feedback,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("requested order {0} is outside of 1..={max}", max = MAX_PROGRESS)]
    OrderOutOfRange(u32),
    #[error("requested order {requested} exceeds the {available} available topics")]
    OrderBeyondContent { requested: u32, available: u32 },
    #[error("rating {0} is outside of {min}..={max}", min = MIN_RATING, max = MAX_RATING)]
    RatingOutOfRange(u8),
    #[error("malformed test payload: {0}")]
    MalformedTest(String),
    #[error("topic title and body must not be empty")]
    EmptyTopic,
    #[error("content already holds the maximum of {max} topics", max = MAX_PROGRESS)]
    ContentFull,
    #[error("only the last topic can be deleted")]
    NotLastTopic,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0} not found")]
    NotFound(Entity),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("conflicting update: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl CoreError {
    /// Like `From<DbErr>`, but reports unique constraint violations as [`CoreError::Conflict`]
    pub(crate) fn from_write(error: DbErr) -> Self {
        match error.unique_violation() {
            Some(detail) => Self::Conflict(detail),
            None => Self::Database(error),
        }
    }
}

impl From<devfusion_model_tools::error::Error> for CoreError {
    fn from(error: devfusion_model_tools::error::Error) -> Self {
        Self::Database(DbErr::Type(error.to_string()))
    }
}
