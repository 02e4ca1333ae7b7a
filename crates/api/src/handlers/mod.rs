pub mod catalog;
pub mod notes;
