use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::progress::RecapReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Topic {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// One based position in the content sequence
    #[schema(example = 1)]
    pub order: u32,
}

/// A topic without its body, used for content listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopicSummary {
    pub id: Uuid,
    pub title: String,
    pub order: u32,
}

impl From<&Topic> for TopicSummary {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title.clone(),
            order: topic.order,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NewTopic {
    pub title: String,
    pub body: String,
}

/// Everything the content page shows for one navigation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicSelection {
    pub content: Vec<TopicSummary>,
    /// `None` if no topic exists at `selected`
    pub topic: Option<Topic>,
    pub selected: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<u32>,
    pub progress: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedTopic {
    pub topic: Topic,
    pub recap: RecapReport,
}
