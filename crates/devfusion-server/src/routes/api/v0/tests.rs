use crate::routes::error::ApiError;
use crate::user::ExtractSession;
use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use devfusion_core::error::{CoreError, Entity};
use devfusion_core::scoring::ScoringEngine;
use devfusion_core::test_set::TestStore;
use devfusion_model::test::{ScoreReport, Submission, TestInstructions, TestSet, TestSummary};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_tests))
        .route("/certification", get(get_certification_test))
        .nest(
            "/{test_id}",
            Router::new()
                .route("/", get(get_test))
                .route("/instructions", get(get_instructions))
                .route("/submit", post(submit)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/tests",
    responses(
        (status = OK, body = Vec<TestSummary>, description = "All test sets"),
    ),
    tag = "v0/tests",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn list_tests(
    ExtractSession(_session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<TestSummary>>, ApiError> {
    Ok(Json(TestStore::new(conn).list_tests().await?))
}

#[utoipa::path(
    get,
    path = "/api/v0/tests/certification",
    responses(
        (status = OK, body = TestSet, description = "The certification test without answers"),
        (status = NOT_FOUND, description = "No certification test is configured"),
    ),
    tag = "v0/tests",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_certification_test(
    ExtractSession(_session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<TestSet>, ApiError> {
    let mut test = TestStore::new(conn)
        .certification_test()
        .await?
        .ok_or(CoreError::NotFound(Entity::TestSet))?;
    test.sanitize_for_client();
    Ok(Json(test))
}

#[utoipa::path(
    get,
    path = "/api/v0/tests/{test_id}",
    params(
        ("test_id" = Uuid, Path, description = "Id of the test set"),
    ),
    responses(
        (status = OK, body = TestSet, description = "The test set without answers"),
        (status = NOT_FOUND, description = "Unknown test set"),
    ),
    tag = "v0/tests",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_test(
    ExtractSession(_session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
    Path(test_id): Path<Uuid>,
) -> Result<Json<TestSet>, ApiError> {
    let mut test = TestStore::new(conn).get_test(test_id).await?;
    test.sanitize_for_client();
    Ok(Json(test))
}

#[utoipa::path(
    get,
    path = "/api/v0/tests/{test_id}/instructions",
    params(
        ("test_id" = Uuid, Path, description = "Id of the test set"),
    ),
    responses(
        (status = OK, body = TestInstructions, description = "Summary of the test and the caller's progress"),
        (status = NOT_FOUND, description = "Unknown test set"),
    ),
    tag = "v0/tests",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_instructions(
    ExtractSession(session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
    Path(test_id): Path<Uuid>,
) -> Result<Json<TestInstructions>, ApiError> {
    Ok(Json(TestStore::new(conn).test_instructions(&session, test_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/v0/tests/{test_id}/submit",
    params(
        ("test_id" = Uuid, Path, description = "Id of the test set"),
    ),
    request_body = Submission,
    responses(
        (status = OK, body = ScoreReport, description = "The graded submission"),
        (status = NOT_FOUND, description = "Unknown test set"),
    ),
    tag = "v0/tests",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn submit(
    ExtractSession(session): ExtractSession,
    Extension(conn): Extension<DatabaseConnection>,
    Path(test_id): Path<Uuid>,
    Json(submission): Json<Submission>,
) -> Result<Json<ScoreReport>, ApiError> {
    let report = ScoringEngine::new(conn)
        .submit(&session, test_id, &submission.answers)
        .await?;
    Ok(Json(report))
}
