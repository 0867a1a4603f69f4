use crate::routes::error::ApiError;
use crate::user::ExtractAdmin;
use axum::extract::Path;
use axum::routing::{delete, get, post};
use axum::{Extension, Json, Router};
use devfusion_core::content::ContentStore;
use devfusion_core::recap::Recapper;
use devfusion_model::progress::RecapReport;
use devfusion_model::topic::{DeletedTopic, NewTopic, Topic};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_content).post(add_topic))
        .route("/last", delete(delete_last_topic))
        .route("/recap", post(recap))
        .route("/{topic_id}", get(get_topic).put(update_topic).delete(delete_topic))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/content",
    responses(
        (status = OK, body = Vec<Topic>, description = "All topics including their bodies"),
        (status = FORBIDDEN, description = "Caller is not an admin"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn list_content(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<Topic>>, ApiError> {
    Ok(Json(ContentStore::new(conn).list_content().await?))
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/content",
    request_body = NewTopic,
    responses(
        (status = CREATED, body = Topic, description = "The topic appended to the content"),
        (status = UNPROCESSABLE_ENTITY, description = "Empty title or body, or the content is full"),
        (status = CONFLICT, description = "Another topic took the position concurrently"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn add_topic(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Json(new_topic): Json<NewTopic>,
) -> Result<(StatusCode, Json<Topic>), ApiError> {
    let topic = ContentStore::new(conn).add_topic(new_topic).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/content/{topic_id}",
    params(
        ("topic_id" = Uuid, Path, description = "Id of the topic"),
    ),
    responses(
        (status = OK, body = Topic),
        (status = NOT_FOUND, description = "Unknown topic"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_topic(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<Uuid>,
) -> Result<Json<Topic>, ApiError> {
    Ok(Json(ContentStore::new(conn).get_topic(topic_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/v0/admin/content/{topic_id}",
    params(
        ("topic_id" = Uuid, Path, description = "Id of the topic"),
    ),
    request_body = NewTopic,
    responses(
        (status = OK, body = Topic, description = "The updated topic, its position is unchanged"),
        (status = NOT_FOUND, description = "Unknown topic"),
        (status = UNPROCESSABLE_ENTITY, description = "Empty title or body"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn update_topic(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<Uuid>,
    Json(new_topic): Json<NewTopic>,
) -> Result<Json<Topic>, ApiError> {
    Ok(Json(ContentStore::new(conn).update_topic(topic_id, new_topic).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v0/admin/content/{topic_id}",
    params(
        ("topic_id" = Uuid, Path, description = "Id of the topic"),
    ),
    responses(
        (status = OK, body = DeletedTopic, description = "The deleted topic and the number of users whose progress was capped"),
        (status = NOT_FOUND, description = "Unknown topic"),
        (status = UNPROCESSABLE_ENTITY, description = "Only the last topic can be deleted"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn delete_topic(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Path(topic_id): Path<Uuid>,
) -> Result<Json<DeletedTopic>, ApiError> {
    Ok(Json(ContentStore::new(conn).delete_topic(topic_id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v0/admin/content/last",
    responses(
        (status = OK, body = DeletedTopic, description = "The deleted topic and the number of users whose progress was capped"),
        (status = NOT_FOUND, description = "There is no content"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn delete_last_topic(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<DeletedTopic>, ApiError> {
    Ok(Json(ContentStore::new(conn).delete_last_topic().await?))
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/content/recap",
    responses(
        (status = OK, body = RecapReport, description = "Caps every user's progress at the current content length"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn recap(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<RecapReport>, ApiError> {
    let count = ContentStore::new(conn.clone()).topic_count().await?;
    Ok(Json(Recapper::new(conn).recap_after_removal(count).await?))
}
