use crate::TestDb;
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// A sqlite database file inside a temporary directory. The directory is removed on drop.
pub struct SqliteDb {
    // Only held so the directory lives as long as the database
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("devfusion-sqlite")?;
        let path = temp_dir.path().join("devfusion.sqlite");
        let path = path
            .to_str()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidData, "non utf-8 temp path"))?;
        let uri = format!("sqlite://{path}?mode=rwc");

        tracing::info!(%uri, "created sqlite test db");
        Ok(Self { temp_dir, uri })
    }

    pub async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        Database::connect(self.uri.as_str()).await
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_connect_creates_file() {
        let db = SqliteDb::new().unwrap();
        let conn = db.connect().await.unwrap();
        conn.ping().await.unwrap();
        assert!(db.temp_dir.path().join("devfusion.sqlite").exists());
    }
}
