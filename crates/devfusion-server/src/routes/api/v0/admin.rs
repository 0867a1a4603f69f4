use axum::Router;

pub(crate) mod content;
pub(crate) mod tests;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .nest("/content", content::create_router())
        .nest("/tests", tests::create_router())
        .with_state(())
}
