use crate::routes::error::ApiError;
use crate::user::ExtractSession;
use axum::routing::get;
use axum::{Extension, Json, Router};
use devfusion_core::user::UserStore;
use devfusion_model::user::{CertificationStatus, User};
use sea_orm::DatabaseConnection;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_user_info))
        .route("/certification", get(get_certification_status))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/user",
    responses(
        (status = OK, body = User, description = "Progress and certification state of the caller"),
    ),
    tag = "v0/user",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_user_info(
    ExtractSession(session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<User>, ApiError> {
    let user = UserStore::new(conn).user_info(&session.email).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/v0/user/certification",
    responses(
        (status = OK, body = CertificationStatus, description = "Whether the caller passed the certification test"),
    ),
    tag = "v0/user",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_certification_status(
    ExtractSession(session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<CertificationStatus>, ApiError> {
    let status = UserStore::new(conn).certification_status(&session.email).await?;
    Ok(Json(status))
}
