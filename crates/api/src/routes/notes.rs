//! Route definitions for notes.
//!
//! Mounted at `/pokemon/{id}/notes` by `app_routes()`. Mutations are POST
//! only; any other method gets `405 Method Not Allowed`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Note routes.
///
/// ```text
/// GET    /                    -> list_notes
/// POST   /                    -> create_note
/// POST   /{note_id}/edit      -> edit_note
/// POST   /{note_id}/delete    -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/{note_id}/edit", post(notes::edit_note))
        .route("/{note_id}/delete", post(notes::delete_note))
}
