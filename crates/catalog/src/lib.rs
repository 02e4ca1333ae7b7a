//! Client and in-memory cache for the upstream Pokémon catalog (Tyradex).
//!
//! The pieces stack bottom-up:
//!
//! - [`CatalogFetcher`] performs the HTTP call and decodes the payload.
//! - [`CatalogCache`] keeps the last good [`CatalogSnapshot`] for a fixed
//!   freshness window and refreshes it on demand.
//! - [`CatalogIndex`] resolves single entities by Pokédex number.

pub mod cache;
pub mod error;
pub mod fetcher;
pub mod index;
pub mod model;

pub use cache::{CatalogCache, CatalogSnapshot, FETCH_TIMEOUT, FRESHNESS_WINDOW};
pub use error::CatalogError;
pub use fetcher::{CatalogFetcher, CatalogSource};
pub use index::CatalogIndex;
pub use model::Pokemon;
