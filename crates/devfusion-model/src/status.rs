use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Ok,
    Error,
}

impl From<http::StatusCode> for ComponentState {
    fn from(value: http::StatusCode) -> Self {
        if value.is_success() { Self::Ok } else { Self::Error }
    }
}

impl<T, E> From<&Result<T, E>> for ComponentState {
    fn from(result: &Result<T, E>) -> Self {
        if result.is_ok() { Self::Ok } else { Self::Error }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Status {
    pub database: ComponentState,
}

impl Status {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.database == ComponentState::Ok
    }
}
