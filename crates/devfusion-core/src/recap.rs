use devfusion_db::user;
use devfusion_model::progress::RecapReport;
use num_traits::ToPrimitive;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::CoreError;

/// Lowers every user whose progress exceeds `new_max` to `new_max` in one bulk update.
/// Running it again reports zero updated users.
pub(crate) async fn recap<C: ConnectionTrait>(conn: &C, new_max: u32) -> Result<RecapReport, CoreError> {
    let updated_count = user::Mutation::cap_progress(conn, new_max.to_i32().unwrap_or(i32::MAX)).await?;
    tracing::info!(new_max, updated_count, "capped user progress");
    Ok(RecapReport { updated_count })
}

#[derive(Debug, Clone)]
pub struct Recapper {
    conn: DatabaseConnection,
}

impl Recapper {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn recap_after_removal(&self, new_max: u32) -> Result<RecapReport, CoreError> {
        recap(&self.conn, new_max).await
    }
}
