pub mod catalog;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                          catalog listing (GET)
/// /pokemon/{id}                              detail with notes (GET)
/// /pokemon/{id}/notes                        list (GET), create (POST)
/// /pokemon/{id}/notes/{note_id}/edit         edit (POST)
/// /pokemon/{id}/notes/{note_id}/delete       soft delete (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .nest("/pokemon/{id}/notes", notes::router())
}
