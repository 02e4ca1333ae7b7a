//! Note content rules and lifecycle state.

use serde::Serialize;

use crate::types::Timestamp;

/// Maximum length of note content in characters.
pub const MAX_NOTE_CONTENT_LENGTH: usize = 10_000;

/// Trim submitted content.
///
/// Returns `None` when nothing is left, which callers treat as a silent
/// no-op rather than an error.
pub fn normalize_note_content(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Validate note content length (in characters, after trimming).
pub fn validate_note_length(content: &str) -> Result<(), String> {
    if content.trim().chars().count() > MAX_NOTE_CONTENT_LENGTH {
        return Err(format!(
            "Note content exceeds maximum length of {MAX_NOTE_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Lifecycle of a note. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NoteState {
    Active,
    Deleted { at: Timestamp },
}

impl NoteState {
    /// Derive the state from the nullable `deleted_at` column.
    pub fn from_deleted_at(deleted_at: Option<Timestamp>) -> Self {
        match deleted_at {
            Some(at) => NoteState::Deleted { at },
            None => NoteState::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, NoteState::Active)
    }
}
