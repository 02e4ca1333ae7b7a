use std::sync::Arc;

use pokedex_catalog::CatalogIndex;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pokedex_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Cached upstream catalog.
    pub catalog: CatalogIndex,
}
