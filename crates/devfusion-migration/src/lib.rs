pub use sea_orm_migration::prelude::*;

use std::error::Error;

mod m20241018_000001_create_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241018_000001_create_tables::Migration)]
    }
}

/// Applies every pending migration. Applied versions are recorded in `seaql_migrations`,
/// so running it against an up to date database does nothing.
pub async fn run_migrations(conn: &sea_orm_migration::sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(conn).await?;
    if pending.is_empty() {
        tracing::debug!("database schema is up to date");
        return Ok(());
    }
    tracing::info!(pending = pending.len(), "running migrations");
    Migrator::up(conn, None).await.inspect_err(|error| {
        tracing::error!(error = error as &dyn Error, "failed to run migrations");
    })
}
