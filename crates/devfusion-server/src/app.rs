use crate::opt::Identity;
use crate::routes;
use axum::{Extension, Router};
use http::{HeaderName, HeaderValue, Method, header};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;


#[derive(Debug)]
pub(crate) struct InnerAppConfig {
    email_header: HeaderName,
    roles_header: HeaderName,
    admin_role: String,
    proxy_secret: Option<ProxySecret>,
}

/// Shared secret the identity proxy attaches to every request it forwards
#[derive(Debug)]
pub(crate) struct ProxySecret {
    pub(crate) header: HeaderName,
    pub(crate) value: String,
}

#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(
        email_header: HeaderName,
        roles_header: HeaderName,
        admin_role: String,
        proxy_secret: Option<ProxySecret>,
    ) -> Self {
        Self(Arc::new(InnerAppConfig {
            email_header,
            roles_header,
            admin_role,
            proxy_secret,
        }))
    }

    pub(crate) fn email_header(&self) -> &HeaderName {
        &self.0.email_header
    }

    pub(crate) fn roles_header(&self) -> &HeaderName {
        &self.0.roles_header
    }

    pub(crate) fn admin_role(&self) -> &str {
        &self.0.admin_role
    }

    pub(crate) fn proxy_secret(&self) -> Option<&ProxySecret> {
        self.0.proxy_secret.as_ref()
    }
}

impl From<Identity> for AppConfig {
    fn from(identity: Identity) -> Self {
        let proxy_secret = identity.proxy_secret.map(|value| ProxySecret {
            header: identity.proxy_secret_header,
            value,
        });
        if proxy_secret.is_none() {
            tracing::warn!("no proxy secret configured, identity headers are trusted from any client");
        }
        Self::new(identity.email_header, identity.roles_header, identity.admin_role, proxy_secret)
    }
}

pub(crate) fn create_app(app_config: AppConfig, origins: &[String], conn: DatabaseConnection) -> anyhow::Result<Router> {
    tracing::info!(?origins, "allowing origins");
    let api_cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<HeaderValue>, _>>()?,
        )
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/user", routes::api::v0::user::create_router())
                .nest("/content", routes::api::v0::content::create_router())
                .nest("/tests", routes::api::v0::tests::create_router())
                .nest("/feedback", routes::api::v0::feedback::create_router())
                .nest("/admin", routes::api::v0::admin::create_router())
                .layer(api_cors),
        )
        .layer(
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(app_config))
                .layer(Extension(conn)),
        )
        .with_state(());
    Ok(app)
}
