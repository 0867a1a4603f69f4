use super::api;

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{ApiKey, ApiKeyValue};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::user::get_user_info,
        api::v0::user::get_certification_status,
        api::v0::content::list_topics,
        api::v0::content::view_topic,
        api::v0::content::advance_progress,
        api::v0::tests::list_tests,
        api::v0::tests::get_certification_test,
        api::v0::tests::get_test,
        api::v0::tests::get_instructions,
        api::v0::tests::submit,
        api::v0::feedback::get_feedback,
        api::v0::feedback::put_feedback,
        api::v0::feedback::get_summary,
        api::v0::feedback::get_recent,
        api::v0::admin::content::list_content,
        api::v0::admin::content::add_topic,
        api::v0::admin::content::get_topic,
        api::v0::admin::content::update_topic,
        api::v0::admin::content::delete_topic,
        api::v0::admin::content::delete_last_topic,
        api::v0::admin::content::recap,
        api::v0::admin::tests::list_tests,
        api::v0::admin::tests::create_test,
        api::v0::admin::tests::get_test,
        api::v0::admin::tests::update_test,
        api::v0::admin::tests::delete_test,
        api::v0::admin::tests::set_certification,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
pub(crate) struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "identity",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "x-forwarded-email",
                "Email of the caller, set by the authenticating proxy",
            ))),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
