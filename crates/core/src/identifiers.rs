//! Parsing of identifiers taken from request paths.
//!
//! Pokédex numbers and note ids are both strictly positive integers. Anything
//! else (empty, non-numeric, signed, zero, overflowing) is rejected as
//! [`CoreError::InvalidIdentifier`], which is distinct from "not found".

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a raw path segment into a positive identifier.
///
/// `kind` names the identifier in the error message (e.g. `"pokemon"`).
pub fn parse_identifier(kind: &str, raw: &str) -> Result<DbId, CoreError> {
    let invalid = || CoreError::InvalidIdentifier(format!("invalid {kind} id '{raw}'"));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid()),
    }
}
