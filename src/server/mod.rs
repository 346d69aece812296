pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OpenAiClient};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// Assembles the application router. Split out from `run` so tests can mount
/// a mock model client.
pub fn router(state: handlers::AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/generate-recipe", post(handlers::generate_recipe))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let model = Arc::new(OpenAiClient::new(config.llm.clone()));

    let app_state = handlers::AppState { model };
    let app = router(app_state, &config.server.static_dir);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
