use crate::routes::error::ApiError;
use crate::user::ExtractSession;
use axum::extract::Query;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use devfusion_core::content::ContentStore;
use devfusion_core::progress::ProgressEngine;
use devfusion_model::progress::Progress;
use devfusion_model::topic::{TopicSelection, TopicSummary};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_topics))
        .route("/view", get(view_topic))
        .route("/progress", post(advance_progress))
        .with_state(())
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub(crate) struct OrderRequest {
    /// One based topic position, the current progress if omitted
    order: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/v0/content",
    responses(
        (status = OK, body = Vec<TopicSummary>, description = "All topics in content order"),
    ),
    tag = "v0/content",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn list_topics(
    ExtractSession(_session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<TopicSummary>>, ApiError> {
    let topics = ContentStore::new(conn).list_topics().await?;
    Ok(Json(topics))
}

#[utoipa::path(
    get,
    path = "/api/v0/content/view",
    params(OrderRequest),
    responses(
        (status = OK, body = TopicSelection, description = "The selected topic with its neighbours. Viewing a topic unlocks it."),
        (status = UNPROCESSABLE_ENTITY, description = "The requested topic does not exist"),
    ),
    tag = "v0/content",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn view_topic(
    ExtractSession(session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
    Query(request): Query<OrderRequest>,
) -> Result<Json<TopicSelection>, ApiError> {
    let selection = ProgressEngine::new(conn).select_topic(&session, request.order).await?;
    Ok(Json(selection))
}

#[utoipa::path(
    post,
    path = "/api/v0/content/progress",
    request_body = OrderRequest,
    responses(
        (status = OK, body = Progress, description = "The progress after unlocking the requested topic"),
        (status = UNPROCESSABLE_ENTITY, description = "The requested topic does not exist"),
    ),
    tag = "v0/content",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn advance_progress(
    ExtractSession(session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<Progress>, ApiError> {
    let progress = ProgressEngine::new(conn)
        .advance_or_fetch(&session, request.order)
        .await?;
    Ok(Json(Progress { progress }))
}
