//! Doclens Web Server
//!
//! Axum-based web server for the analyzer page and the analyze API.

pub mod assets;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use doclens_llm::DocumentAnalyzer;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::pages::index))
        .route("/static/style.css", get(routes::pages::style))
        .route("/static/script.js", get(routes::pages::script))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    analyzer: Arc<DocumentAnalyzer>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
