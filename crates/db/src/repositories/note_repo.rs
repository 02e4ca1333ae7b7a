//! Repository for the `notes` table.
//!
//! Notes are soft-deleted: `deleted_at` is set and the row is kept. Every
//! query except [`NoteRepo::find_by_id_include_deleted`] only sees live rows.
//!
//! Content is trimmed here; blank content never reaches the database and is
//! reported as a no-op (`Ok(None)` from `create`, the unchanged note from
//! `update`).

use pokedex_core::notes::normalize_note_content;
use pokedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, pokemon_id, content, created_at, updated_at, deleted_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a note, returning the created row.
    ///
    /// Returns `Ok(None)` without touching the database when the trimmed
    /// content is empty.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Option<Note>, sqlx::Error> {
        let Some(content) = normalize_note_content(&input.content) else {
            return Ok(None);
        };

        let query = format!(
            "INSERT INTO notes (pokemon_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(input.pokemon_id)
            .bind(content)
            .fetch_one(pool)
            .await?;
        Ok(Some(note))
    }

    /// Find a live note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a note by ID whether or not it has been deleted.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live notes for a Pokémon, newest first.
    pub async fn list_by_pokemon(pool: &PgPool, pokemon_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE pokemon_id = $1 AND deleted_at IS NULL
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(pokemon_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the content of a live note, returning the updated row.
    ///
    /// Returns `Ok(None)` if no live note has this ID. Blank content leaves
    /// the note untouched and returns it as is.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let Some(content) = normalize_note_content(&input.content) else {
            return Self::find_by_id(pool, id).await;
        };

        let query = format!(
            "UPDATE notes SET content = $2
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a note. Returns `true` if a live note was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE notes SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
