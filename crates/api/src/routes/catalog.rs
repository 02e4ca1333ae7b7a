//! Route definitions for catalog browsing.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes.
///
/// ```text
/// GET    /                   -> list_pokemon
/// GET    /pokemon/{id}       -> get_pokemon
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_pokemon))
        .route("/pokemon/{id}", get(catalog::get_pokemon))
}
