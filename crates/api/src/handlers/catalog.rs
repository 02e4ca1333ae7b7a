//! Handlers for browsing the upstream catalog.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use pokedex_catalog::Pokemon;
use pokedex_core::error::CoreError;
use pokedex_core::identifiers::parse_identifier;
use pokedex_db::models::note::Note;
use pokedex_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Detail payload: the entity plus its live notes, newest first.
#[derive(Debug, Serialize)]
pub struct PokemonDetail {
    pub pokemon: Pokemon,
    /// Base stat total, absent when upstream has no stat block.
    pub stat_total: Option<i32>,
    pub notes: Vec<Note>,
}

/// GET /
///
/// List the whole catalog in upstream order.
pub async fn list_pokemon(State(state): State<AppState>) -> AppResult<Response> {
    let snapshot = state.catalog.list().await?;

    // Serialize straight from the shared snapshot.
    Ok(Json(DataResponse {
        data: snapshot.pokemon(),
    })
    .into_response())
}

/// GET /pokemon/{id}
///
/// Get a single Pokémon with its notes.
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_identifier("pokemon", &raw_id)?;

    let pokemon = state.catalog.find_by_id(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Pokemon",
            id,
        })
    })?;

    let notes = NoteRepo::list_by_pokemon(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: PokemonDetail {
            stat_total: pokemon.stats.as_ref().map(|s| s.total()),
            pokemon,
            notes,
        },
    }))
}
