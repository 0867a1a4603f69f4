use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Highest content position a user can ever unlock
pub const MAX_PROGRESS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Progress {
    pub progress: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecapReport {
    /// Number of users whose progress was lowered
    pub updated_count: u64,
}
