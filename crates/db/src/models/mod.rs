//! Row types and DTOs, one module per table.

pub mod note;
