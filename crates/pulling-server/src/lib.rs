pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use pulling_core::config::Config;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: Config) -> Router {
    let app_state = state::AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health))
        .route("/api/config", get(routes::config::get_config))
        .route("/api/program", post(routes::program::generate))
        .route("/api/modules", post(routes::program::modules))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Bind `bind:port` and serve the API until the process is stopped.
pub async fn serve(config: Config, bind: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}")).await?;
    serve_on(config, listener).await
}

/// Serve the API on a pre-bound listener.
///
/// Lets the caller read the actual port first when binding port 0.
pub async fn serve_on(config: Config, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = build_router(config);

    tracing::info!("pulling API listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
