use axum::extract::State;
use axum::{routing::get, Json, Router};
use pokedex_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
    /// Entries in the cached catalog, `null` before the first fetch.
    pub catalog_size: Option<usize>,
    /// When the cached catalog was fetched, `null` before the first fetch.
    pub catalog_fetched_at: Option<Timestamp>,
}

/// GET /health -- returns service, database and cache health.
///
/// Never contacts the upstream catalog.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = pokedex_db::health_check(&state.pool).await.is_ok();
    let snapshot = state.catalog.cache().cached().await;
    let catalog_size = snapshot.as_ref().map(|s| s.len());
    let catalog_fetched_at = snapshot.as_ref().map(|s| s.fetched_at());

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        catalog_size,
        catalog_fetched_at,
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
