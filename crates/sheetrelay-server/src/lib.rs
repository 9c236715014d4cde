pub mod api;
pub mod config;
pub mod error;
pub mod sheets;

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::sheets::{ServiceAccountConnector, SheetsConnector};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub sheets: Arc<dyn SheetsConnector>,
}

/// Run the server with the given configuration
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    // Credentials are read per request, so startup only records the path
    let connector = ServiceAccountConnector::new(&config.credentials_path);

    let state = AppState {
        sheets: Arc::new(connector),
    };

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
