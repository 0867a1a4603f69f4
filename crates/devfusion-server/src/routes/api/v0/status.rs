use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use devfusion_core::status::get_status as load_status;
use devfusion_model::status::Status;
use http::StatusCode;
use sea_orm::DatabaseConnection;
use tracing::instrument;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(get_status)).with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/status",
    responses(
        (status = OK, description = "Server is ok", body = Status),
        (status = SERVICE_UNAVAILABLE, description = "Database is not reachable", body = Status),
    ),
    tag = "util"
)]
#[instrument(skip_all)]
pub(crate) async fn get_status(Extension(conn): Extension<DatabaseConnection>) -> impl IntoResponse {
    let status = load_status(&conn).await;
    let status_code = if status.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status_code, Json(status))
}
