use devfusion_db::user;
use devfusion_model::user::{CertificationStatus, User};
use devfusion_model_tools::convert::TryIntoModel;
use sea_orm::DatabaseConnection;

use crate::error::{CoreError, Entity};
use crate::test_set::TestStore;

#[derive(Debug, Clone)]
pub struct UserStore {
    conn: DatabaseConnection,
}

impl UserStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Returns the record for `email`, creating a fresh one on first login
    pub async fn register(&self, email: &str) -> Result<User, CoreError> {
        let user = user::Mutation::get_or_create_user(&self.conn, email).await?;
        Ok(user.try_into_model()?)
    }

    pub async fn user_info(&self, email: &str) -> Result<User, CoreError> {
        let user = user::Query::find_user_by_email(&self.conn, email)
            .await?
            .ok_or(CoreError::NotFound(Entity::User))?;
        Ok(user.try_into_model()?)
    }

    pub async fn certification_status(&self, email: &str) -> Result<CertificationStatus, CoreError> {
        let user = self.user_info(email).await?;
        let certification_test = TestStore::new(self.conn.clone())
            .certification_test()
            .await?
            .map(|test| test.summary());
        Ok(CertificationStatus {
            is_pass: user.is_pass,
            certification_test,
        })
    }
}
