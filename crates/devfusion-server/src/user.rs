use crate::app::AppConfig;
use axum::extract::FromRequestParts;
use axum::{Extension, RequestPartsExt};
use devfusion_core::session::UserSession;
use devfusion_core::user::UserStore;
use http::StatusCode;
use http::request::Parts;
use sea_orm::DatabaseConnection;
use std::error::Error;

type Rejection = (StatusCode, &'static str);

/// The caller as identified by the authenticating proxy. First contact registers the user.
#[derive(Clone, Debug)]
pub(crate) struct ExtractSession(pub UserSession);

/// Like [`ExtractSession`], but only for callers holding the admin role
#[derive(Clone, Debug)]
pub(crate) struct ExtractAdmin(pub UserSession);

/// Whether the request carries the proxy secret, if one is configured
fn from_proxy(parts: &Parts, config: &AppConfig) -> bool {
    let Some(secret) = config.proxy_secret() else {
        return true;
    };
    parts
        .headers
        .get(&secret.header)
        .is_some_and(|value| value.as_bytes() == secret.value.as_bytes())
}

fn has_role(parts: &Parts, config: &AppConfig) -> bool {
    parts
        .headers
        .get_all(config.roles_header())
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|role| role.trim() == config.admin_role())
}

impl<S> FromRequestParts<S> for ExtractSession
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension::<AppConfig>(config) = parts.extract::<Extension<AppConfig>>().await.map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "app config not found in app data");
            (StatusCode::INTERNAL_SERVER_ERROR, "App config not found")
        })?;
        let Extension::<DatabaseConnection>(conn) =
            parts
                .extract::<Extension<DatabaseConnection>>()
                .await
                .map_err(|error| {
                    tracing::error!(
                        error = &error as &dyn Error,
                        "database connection not found in app data"
                    );
                    (StatusCode::INTERNAL_SERVER_ERROR, "Database Connection not found")
                })?;

        if !from_proxy(parts, &config) {
            tracing::warn!("rejecting request that did not pass the identity proxy");
            return Err((StatusCode::UNAUTHORIZED, "No identity provided"));
        }
        let email = parts
            .headers
            .get(config.email_header())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or((StatusCode::UNAUTHORIZED, "No identity provided"))?
            .to_owned();
        let is_admin = has_role(parts, &config);

        UserStore::new(conn).register(&email).await.map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "failed to register user");
            (StatusCode::SERVICE_UNAVAILABLE, "Error registering user")
        })?;
        Ok(Self(UserSession::new(email, is_admin)))
    }
}

impl<S> FromRequestParts<S> for ExtractAdmin
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ExtractSession(session) = ExtractSession::from_request_parts(parts, state).await?;
        if !session.is_admin {
            tracing::debug!(email = %session.email, "rejecting admin request");
            return Err((StatusCode::FORBIDDEN, "Admin role required"));
        }
        Ok(Self(session))
    }
}
