//! Domain types and rules shared by every crate in the workspace.
//!
//! Nothing in here performs I/O: the catalog client, the database layer and
//! the HTTP server all depend on these definitions.

pub mod error;
pub mod identifiers;
pub mod notes;
pub mod types;
