use crate::routes::error::ApiError;
use crate::user::ExtractSession;
use axum::extract::Query;
use axum::routing::get;
use axum::{Extension, Json, Router};
use devfusion_core::feedback::FeedbackStore;
use devfusion_model::feedback::{Feedback, RatingSummary};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use utoipa::IntoParams;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_feedback).put(put_feedback))
        .route("/summary", get(get_summary))
        .route("/recent", get(get_recent))
        .with_state(())
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub(crate) struct RecentFilter {
    /// Number of reviews, defaults to 5
    limit: Option<u64>,
    /// Only reviews with this rating
    rating: Option<u8>,
}

#[utoipa::path(
    get,
    path = "/api/v0/feedback",
    responses(
        (status = OK, body = Feedback, description = "The feedback of the caller"),
        (status = NOT_FOUND, description = "The caller did not leave feedback yet"),
    ),
    tag = "v0/feedback",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_feedback(
    ExtractSession(session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Feedback>, ApiError> {
    Ok(Json(FeedbackStore::new(conn).fetch_feedback(&session.email).await?))
}

#[utoipa::path(
    put,
    path = "/api/v0/feedback",
    request_body = Feedback,
    responses(
        (status = OK, body = Feedback, description = "The stored feedback, replacing any earlier one"),
        (status = UNPROCESSABLE_ENTITY, description = "Rating outside of 1 to 5"),
    ),
    tag = "v0/feedback",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn put_feedback(
    ExtractSession(session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
    Json(feedback): Json<Feedback>,
) -> Result<Json<Feedback>, ApiError> {
    let stored = FeedbackStore::new(conn)
        .upsert_feedback(&session.email, feedback)
        .await?;
    Ok(Json(stored))
}

#[utoipa::path(
    get,
    path = "/api/v0/feedback/summary",
    responses(
        (status = OK, body = RatingSummary, description = "Rating counts and average over all users"),
    ),
    tag = "v0/feedback",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_summary(
    ExtractSession(_session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<RatingSummary>, ApiError> {
    Ok(Json(FeedbackStore::new(conn).rating_summary().await?))
}

#[utoipa::path(
    get,
    path = "/api/v0/feedback/recent",
    params(RecentFilter),
    responses(
        (status = OK, body = Vec<Feedback>, description = "Newest reviews first"),
    ),
    tag = "v0/feedback",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_recent(
    ExtractSession(_session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
    Query(filter): Query<RecentFilter>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let reviews = FeedbackStore::new(conn)
        .recent_reviews(filter.limit, filter.rating)
        .await?;
    Ok(Json(reviews))
}
