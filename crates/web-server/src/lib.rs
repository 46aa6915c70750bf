use axum::{routing::get, Router};
use configuration::ViewSettings;
use core_types::DataBundle;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod html;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup and never mutated.
    pub bundle: &'static DataBundle,
    pub views: ViewSettings,
}

/// Builds the router with every dashboard route and the CORS/trace middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::index))
        .route("/views/:view", get(handlers::get_view_html))
        .route("/api/health", get(handlers::health))
        .route("/api/views", get(handlers::list_views))
        .route("/api/views/:view", get(handlers::get_view))
        .with_state(Arc::new(state))
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Web server listening.");
    axum::serve(listener, app).await?;

    Ok(())
}
