//! Handlers for notes attached to a Pokémon.
//!
//! Mutations take a form body and answer with `303 See Other` back to the
//! Pokémon's page, including when blank content made them a no-op. A body
//! that is missing or not form-encoded counts as blank content.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use serde::Deserialize;

use pokedex_core::error::CoreError;
use pokedex_core::identifiers::parse_identifier;
use pokedex_core::notes::validate_note_length;
use pokedex_core::types::DbId;
use pokedex_db::models::note::{CreateNote, UpdateNote};
use pokedex_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Form body for create and edit. A missing field counts as blank.
#[derive(Debug, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub content: String,
}

/// Content of a note form, or empty when the request carried no form body.
fn form_content(form: Result<Form<NoteForm>, FormRejection>) -> AppResult<String> {
    match form {
        Ok(Form(form)) => Ok(form.content),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(String::new()),
        Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
    }
}

fn pokemon_page(pokemon_id: DbId) -> Redirect {
    Redirect::to(&format!("/pokemon/{pokemon_id}"))
}

fn parse_note_path(raw_pokemon_id: &str, raw_note_id: &str) -> AppResult<(DbId, DbId)> {
    let pokemon_id = parse_identifier("pokemon", raw_pokemon_id)?;
    let note_id = parse_identifier("note", raw_note_id)?;
    Ok((pokemon_id, note_id))
}

fn note_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note", id })
}

/// GET /pokemon/{id}/notes
///
/// List live notes for a Pokémon, newest first.
pub async fn list_notes(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let pokemon_id = parse_identifier("pokemon", &raw_id)?;

    let notes = NoteRepo::list_by_pokemon(&state.pool, pokemon_id).await?;

    Ok(Json(DataResponse { data: notes }))
}

/// POST /pokemon/{id}/notes
///
/// Create a note. The Pokémon id is not checked against the catalog.
pub async fn create_note(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: Result<Form<NoteForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let pokemon_id = parse_identifier("pokemon", &raw_id)?;
    let content = form_content(form)?;
    validate_note_length(&content).map_err(CoreError::Validation)?;

    let input = CreateNote {
        pokemon_id,
        content,
    };

    match NoteRepo::create(&state.pool, &input).await? {
        Some(note) => tracing::info!(note_id = note.id, pokemon_id, "Note created"),
        None => tracing::debug!(pokemon_id, "Blank note ignored"),
    }

    Ok(pokemon_page(pokemon_id))
}

/// POST /pokemon/{id}/notes/{note_id}/edit
///
/// Replace a note's content.
pub async fn edit_note(
    State(state): State<AppState>,
    Path((raw_pokemon_id, raw_note_id)): Path<(String, String)>,
    form: Result<Form<NoteForm>, FormRejection>,
) -> AppResult<impl IntoResponse> {
    let (pokemon_id, note_id) = parse_note_path(&raw_pokemon_id, &raw_note_id)?;
    let content = form_content(form)?;
    validate_note_length(&content).map_err(CoreError::Validation)?;

    let input = UpdateNote { content };

    NoteRepo::update(&state.pool, note_id, &input)
        .await?
        .ok_or_else(|| note_not_found(note_id))?;

    tracing::info!(note_id, pokemon_id, "Note updated");

    Ok(pokemon_page(pokemon_id))
}

/// POST /pokemon/{id}/notes/{note_id}/delete
///
/// Soft-delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path((raw_pokemon_id, raw_note_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let (pokemon_id, note_id) = parse_note_path(&raw_pokemon_id, &raw_note_id)?;

    if !NoteRepo::soft_delete(&state.pool, note_id).await? {
        return Err(note_not_found(note_id));
    }

    tracing::info!(note_id, pokemon_id, "Note deleted");

    Ok(pokemon_page(pokemon_id))
}
