use crate::routes::error::ApiError;
use crate::user::ExtractAdmin;
use axum::extract::Path;
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use devfusion_core::test_set::TestStore;
use devfusion_model::test::{CertificationFlag, TestSet, TestSetInput, TestSummary};
use http::StatusCode;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_tests).post(create_test))
        .route("/{test_id}", get(get_test).put(update_test).delete(delete_test))
        .route("/{test_id}/certification", put(set_certification))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/tests",
    responses(
        (status = OK, body = Vec<TestSummary>),
        (status = FORBIDDEN, description = "Caller is not an admin"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn list_tests(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<TestSummary>>, ApiError> {
    Ok(Json(TestStore::new(conn).list_tests().await?))
}

#[utoipa::path(
    post,
    path = "/api/v0/admin/tests",
    request_body = TestSetInput,
    responses(
        (status = CREATED, body = TestSet, description = "The created test set including answers"),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed test payload"),
        (status = CONFLICT, description = "Another certification test was set concurrently"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn create_test(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Json(input): Json<TestSetInput>,
) -> Result<(StatusCode, Json<TestSet>), ApiError> {
    let test = TestStore::new(conn).create_test(input).await?;
    Ok((StatusCode::CREATED, Json(test)))
}

#[utoipa::path(
    get,
    path = "/api/v0/admin/tests/{test_id}",
    params(
        ("test_id" = Uuid, Path, description = "Id of the test set"),
    ),
    responses(
        (status = OK, body = TestSet, description = "The test set including answers"),
        (status = NOT_FOUND, description = "Unknown test set"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn get_test(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Path(test_id): Path<Uuid>,
) -> Result<Json<TestSet>, ApiError> {
    Ok(Json(TestStore::new(conn).get_test(test_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/v0/admin/tests/{test_id}",
    params(
        ("test_id" = Uuid, Path, description = "Id of the test set"),
    ),
    request_body = TestSetInput,
    responses(
        (status = OK, body = TestSet, description = "The updated test set, questions are replaced"),
        (status = NOT_FOUND, description = "Unknown test set"),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed test payload"),
        (status = CONFLICT, description = "Another certification test was set concurrently"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn update_test(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Path(test_id): Path<Uuid>,
    Json(input): Json<TestSetInput>,
) -> Result<Json<TestSet>, ApiError> {
    Ok(Json(TestStore::new(conn).update_test(test_id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/v0/admin/tests/{test_id}",
    params(
        ("test_id" = Uuid, Path, description = "Id of the test set"),
    ),
    responses(
        (status = NO_CONTENT, description = "The test set and its questions were deleted"),
        (status = NOT_FOUND, description = "Unknown test set"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn delete_test(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Path(test_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    TestStore::new(conn).delete_test(test_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/v0/admin/tests/{test_id}/certification",
    params(
        ("test_id" = Uuid, Path, description = "Id of the test set"),
    ),
    request_body = CertificationFlag,
    responses(
        (status = OK, body = TestSet, description = "The test set after the flag change. Setting the flag clears it on every other test."),
        (status = NOT_FOUND, description = "Unknown test set"),
        (status = CONFLICT, description = "Another certification test was set concurrently"),
    ),
    tag = "v0/admin",
    security(
        ("identity" = [])
    )
)]
pub(crate) async fn set_certification(
    ExtractAdmin(_admin): ExtractAdmin,
    Extension(conn): Extension<DatabaseConnection>,
    Path(test_id): Path<Uuid>,
    Json(flag): Json<CertificationFlag>,
) -> Result<Json<TestSet>, ApiError> {
    let test = TestStore::new(conn)
        .set_certification(test_id, flag.is_certification)
        .await?;
    Ok(Json(test))
}
