pub mod error;
pub mod routes;
pub mod state;
pub mod types;

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::utils::error::Result;
use state::AppState;

/// Builds the application router. CORS is fully permissive: the form is
/// served from a different origin and the API carries no credentials.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(routes::hello))
        .route("/", get(routes::catalog))
        .route("/get_cars", post(routes::get_cars))
        .route("/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚗 car-price-api listening on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
