mod config;
mod errors;
mod logging;
mod models;
mod page;
mod routes;
mod security;

use axum::{Router, extract::DefaultBodyLimit, middleware, serve};
use routes::create_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::load()?;

    let router: Router = create_router()
        .layer(middleware::from_fn(security::headers::set_security_headers))
        .layer(DefaultBodyLimit::max(security::form::MAX_BODY_SIZE_BYTES));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Serving contact page");

    serve(listener, router).await?;

    Ok(())
}
