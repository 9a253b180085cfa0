use std::net::SocketAddr;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::storage::SightingStore;

mod cors;
mod error;
mod handlers;
mod logging;
pub mod models;

pub use error::ApiError;

use handlers::{
    create_sighting, delete_sighting, get_sighting, health, not_found, update_sighting,
};

#[derive(Clone)]
pub struct AppState<S: SightingStore> {
    pub store: S,
    pub started_at: std::time::SystemTime,
}

/// Builds the HTTP/JSON API over `store`.
pub fn router<S: SightingStore + Clone + Send + Sync + 'static>(store: S) -> Router {
    let state = AppState {
        store,
        started_at: std::time::SystemTime::now(),
    };

    Router::new()
        .route("/health", get(health::<S>))
        .route("/api/v1/ufo", post(create_sighting::<S>))
        .route(
            "/api/v1/ufo/:uuid",
            get(get_sighting::<S>)
                .patch(update_sighting::<S>)
                .delete(delete_sighting::<S>),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(cors::cors))
        .layer(middleware::from_fn(logging::log_requests))
        .with_state(state)
}

pub async fn serve<S: SightingStore + Clone + Send + Sync + 'static>(
    addr: SocketAddr,
    store: S,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 HTTP API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 HTTP shutdown requested");
        })
        .await?;
    log::info!("👋 HTTP server exited");
    Ok(())
}
