use axum::Router;

pub mod contact;

pub fn create_router() -> Router {
    tracing::debug!("Creating application router");
    Router::new().merge(contact::router())
}
