//! Note model.

use pokedex_core::notes::NoteState;
use pokedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub pokemon_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Note {
    pub fn state(&self) -> NoteState {
        NoteState::from_deleted_at(self.deleted_at)
    }
}

/// DTO for creating a note. `content` is trimmed by the repository.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub pokemon_id: DbId,
    pub content: String,
}

/// DTO for editing a note's content.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub content: String,
}
