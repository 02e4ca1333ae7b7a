//! Time-bounded cache over the upstream catalog.
//!
//! A [`CatalogCache`] holds at most one [`CatalogSnapshot`] behind an
//! `RwLock<Option<Arc<_>>>`. Refreshes build a complete new snapshot and swap
//! the `Arc` in one write, so readers see either the old catalog or the new
//! one, never a mix. A failed refresh leaves the previous snapshot in place.
//!
//! Refresh attempts are serialized by a separate mutex: callers that pile up
//! behind an in-flight refresh re-check freshness once they get the lock and
//! reuse whatever that refresh published.

use std::sync::Arc;
use std::time::Duration;

use pokedex_core::types::{DbId, Timestamp};
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::error::CatalogError;
use crate::fetcher::CatalogSource;
use crate::model::Pokemon;

/// How long a snapshot is served without contacting upstream.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Upper bound on a single upstream fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One immutable copy of the catalog plus when it was fetched.
#[derive(Debug)]
pub struct CatalogSnapshot {
    pokemon: Vec<Pokemon>,
    fetched_at: Timestamp,
    fetched_instant: Instant,
}

impl CatalogSnapshot {
    fn new(pokemon: Vec<Pokemon>) -> Self {
        Self {
            pokemon,
            fetched_at: chrono::Utc::now(),
            fetched_instant: Instant::now(),
        }
    }

    /// Entries in upstream order.
    pub fn pokemon(&self) -> &[Pokemon] {
        &self.pokemon
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    /// Wall-clock fetch time.
    pub fn fetched_at(&self) -> Timestamp {
        self.fetched_at
    }

    /// Time elapsed since the fetch completed.
    pub fn age(&self) -> Duration {
        self.fetched_instant.elapsed()
    }

    /// First entry with the given Pokédex number (linear scan).
    pub fn find_by_id(&self, id: DbId) -> Option<&Pokemon> {
        self.pokemon.iter().find(|p| p.pokedex_id == id)
    }

    fn is_fresh(&self, window: Duration) -> bool {
        !self.is_empty() && self.age() < window
    }
}

/// Process-local cache of the upstream catalog.
///
/// Designed to be wrapped in `Arc` and shared across request handlers.
pub struct CatalogCache {
    source: Arc<dyn CatalogSource>,
    freshness_window: Duration,
    fetch_timeout: Duration,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
    refresh_lock: Mutex<()>,
}

impl CatalogCache {
    /// Create an empty cache using the standard freshness window and fetch
    /// timeout.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            freshness_window: FRESHNESS_WINDOW,
            fetch_timeout: FETCH_TIMEOUT,
            snapshot: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Return a fresh snapshot, fetching from upstream if the cached one is
    /// missing, empty, or older than the freshness window.
    ///
    /// A failed fetch is returned as an error; the stale snapshot stays
    /// cached and the next call tries again.
    pub async fn get_catalog(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            return Ok(snapshot);
        }

        let _refresh = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited for the lock.
        if let Some(snapshot) = self.fresh_snapshot().await {
            return Ok(snapshot);
        }

        self.refresh().await
    }

    /// The current snapshot, without fetching. May be stale or absent.
    pub async fn cached(&self) -> Option<Arc<CatalogSnapshot>> {
        self.snapshot.read().await.clone()
    }

    async fn fresh_snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .filter(|s| s.is_fresh(self.freshness_window))
            .cloned()
    }

    async fn refresh(&self) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        let started = Instant::now();

        let pokemon = match tokio::time::timeout(self.fetch_timeout, self.source.fetch()).await {
            Ok(Ok(pokemon)) => pokemon,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Catalog refresh failed, keeping previous snapshot");
                return Err(e);
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.fetch_timeout.as_secs(),
                    "Catalog refresh timed out, keeping previous snapshot"
                );
                return Err(CatalogError::Timeout(self.fetch_timeout));
            }
        };

        let snapshot = Arc::new(CatalogSnapshot::new(pokemon));
        *self.snapshot.write().await = Some(Arc::clone(&snapshot));

        tracing::info!(
            count = snapshot.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Catalog snapshot refreshed"
        );

        Ok(snapshot)
    }
}
