use devfusion_model::status::{ComponentState, Status};
use sea_orm::prelude::Expr;
use sea_orm::sea_query::Query;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::error::Error;
use std::time::Duration;
use tokio::time::timeout;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn get_db_status(conn: &DatabaseConnection, duration: Option<Duration>) -> ComponentState {
    let mut query = Query::select();
    query.expr(Expr::current_timestamp());
    let res = timeout(
        duration.unwrap_or_else(|| Duration::from_secs(5)),
        conn.execute(conn.get_database_backend().build(&query)),
    )
    .await;
    match res {
        Ok(Ok(_)) => ComponentState::Ok,
        Ok(Err(error)) => {
            tracing::error!(error = &error as &dyn Error, "db error during health check");
            ComponentState::Error
        }
        Err(error) => {
            tracing::error!(error = &error as &dyn Error, "db health check timed out");
            ComponentState::Error
        }
    }
}

pub async fn get_status(conn: &DatabaseConnection) -> Status {
    Status {
        database: get_db_status(conn, None).await,
    }
}
