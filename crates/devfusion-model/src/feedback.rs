use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Feedback {
    #[serde(default)]
    pub message: Option<String>,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RatingCount {
    pub rating: u8,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RatingSummary {
    /// Only ratings that were given at least once, ascending
    pub per_rating: Vec<RatingCount>,
    pub average_rating: f64,
    pub total_reviews: u64,
}

