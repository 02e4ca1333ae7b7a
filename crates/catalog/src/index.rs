//! Lookup of catalog entities by Pokédex number.

use std::sync::Arc;

use pokedex_core::types::DbId;

use crate::cache::{CatalogCache, CatalogSnapshot};
use crate::error::CatalogError;
use crate::model::Pokemon;

/// Read-side facade over a shared [`CatalogCache`]. Cheap to clone.
#[derive(Clone)]
pub struct CatalogIndex {
    cache: Arc<CatalogCache>,
}

impl CatalogIndex {
    pub fn new(cache: Arc<CatalogCache>) -> Self {
        Self { cache }
    }

    /// The full catalog, fetched or served from cache.
    pub async fn list(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        self.cache.get_catalog().await
    }

    /// Resolve a single entity.
    ///
    /// `Ok(None)` means the catalog was available but has no entry with this
    /// number. Cache errors are passed through unchanged.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Pokemon>, CatalogError> {
        let snapshot = self.cache.get_catalog().await?;
        Ok(snapshot.find_by_id(id).cloned())
    }

    pub fn cache(&self) -> &Arc<CatalogCache> {
        &self.cache
    }
}
