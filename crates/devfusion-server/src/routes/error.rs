use axum::Json;
use axum::response::{IntoResponse, Response};
use devfusion_core::error::CoreError;
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use thiserror::Error;
use utoipa::ToSchema;

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> http::StatusCode;
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorData<T> {
    pub(crate) error: T,
    pub(crate) error_description: Cow<'static, str>,
}

impl<T> ErrorData<T> {
    pub fn new<A: Into<Cow<'static, str>>>(error: T, error_description: A) -> Self {
        Self {
            error,
            error_description: error_description.into(),
        }
    }
}

pub(crate) trait ErrorDataProvider<T: GetStatusCode> {
    fn error_data(self) -> Option<ErrorData<T>>;
}

#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ApiErrorType {
    NotFound,
    Validation,
    Conflict,
}

impl GetStatusCode for ApiErrorType {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::Validation => http::StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict => http::StatusCode::CONFLICT,
        }
    }
}

impl GetStatusCode for ApiError {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::Core(CoreError::Database(_)) => http::StatusCode::SERVICE_UNAVAILABLE,
            Self::Core(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorDataProvider<ApiErrorType> for ApiError {
    fn error_data(self) -> Option<ErrorData<ApiErrorType>> {
        let Self::Core(error) = self;
        let res = match error {
            CoreError::NotFound(entity) => ErrorData::new(ApiErrorType::NotFound, format!("{entity} not found")),
            CoreError::Validation(error) => ErrorData::new(ApiErrorType::Validation, error.to_string()),
            CoreError::Conflict(detail) => {
                tracing::warn!(%detail, "rejected conflicting update");
                ErrorData::new(ApiErrorType::Conflict, "conflicting concurrent update, retry the request")
            }
            CoreError::Database(error) => {
                tracing::error!(error = &error as &dyn Error, "error communicating with database");
                return None;
            }
        };
        Some(res)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}

pub(crate) fn error_to_axum_response<E, T>(error: T) -> Response
where
    E: GetStatusCode + serde::Serialize,
    T: GetStatusCode + ErrorDataProvider<E>,
{
    let status_code = GetStatusCode::status_code(&error);
    let error_data = error.error_data();
    match error_data {
        Some(data) => {
            let status_code = GetStatusCode::status_code(&data.error);
            let json = Json(data);
            (status_code, json).into_response()
        }
        None => status_code.into_response(),
    }
}
