//! netinv-server - HTTP surfaces over the inventory engine
//!
//! One axum router carrying three transports that share the engine layer:
//! - REST under `/inventory/api`
//! - GraphQL at `/graphql`
//! - server-rendered HTML fragments for the htmx UI

pub mod config;
pub mod error;
pub mod graphql;
pub mod middleware;
pub mod rest;
pub mod state;
pub mod ui;

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use state::AppState;

/// Build the complete application router
pub fn build_router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());

    Router::new()
        .merge(rest::router())
        .merge(ui::router())
        .merge(graphql::router(schema))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id))
        .with_state(state)
}

/// Serve the router until `shutdown` resolves
///
/// # Errors
///
/// Returns the I/O error raised by the listener.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
