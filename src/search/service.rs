//! TTL-cached index holder.
//!
//! One `IndexService` instance owns the catalog source and the currently
//! built index. Handlers share it through an `Arc`; the index itself is
//! replaced wholesale behind an inner `Arc` on every rebuild, so readers
//! always observe a complete, immutable snapshot.

use super::index::{IndexEntry, build_index};
use crate::catalog::client::TourSource;
use crate::catalog::fetcher::fetch_all_tours;
use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

pub const INDEX_TTL: Duration = Duration::from_secs(600);

#[derive(Debug)]
pub struct TourIndex {
    pub built_at: Instant,
    pub entries: Vec<IndexEntry>,
}

pub struct IndexService<S> {
    source: S,
    ttl: Duration,
    current: RwLock<Option<Arc<TourIndex>>>,
    rebuild_guard: Mutex<()>,
}

impl<S: TourSource> IndexService<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, INDEX_TTL)
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            current: RwLock::new(None),
            rebuild_guard: Mutex::new(()),
        }
    }

    /// Returns the cached index, rebuilding first when absent or older than
    /// the TTL. The fast path is a read lock and a timestamp comparison.
    /// Concurrent misses queue on the rebuild guard; losers of the race
    /// re-check freshness and reuse the winner's result instead of fetching
    /// again.
    pub async fn current(&self) -> Result<Arc<TourIndex>> {
        if let Some(index) = self.fresh().await {
            return Ok(index);
        }

        let _guard = self.rebuild_guard.lock().await;
        if let Some(index) = self.fresh().await {
            return Ok(index);
        }
        self.rebuild().await
    }

    /// Current value without any rebuild side effect, stale or not.
    pub async fn peek(&self) -> Option<Arc<TourIndex>> {
        self.current.read().await.clone()
    }

    /// Drops the cached value; the next `current()` call rebuilds.
    pub async fn invalidate(&self) {
        *self.current.write().await = None;
    }

    /// Rebuilds unconditionally, serialized by the same guard as cache-miss
    /// rebuilds.
    pub async fn force_rebuild(&self) -> Result<Arc<TourIndex>> {
        let _guard = self.rebuild_guard.lock().await;
        self.rebuild().await
    }

    async fn fresh(&self) -> Option<Arc<TourIndex>> {
        let current = self.current.read().await;
        current
            .as_ref()
            .filter(|index| index.built_at.elapsed() < self.ttl)
            .cloned()
    }

    // A fetch error returns before the store, leaving the previous value in
    // place for the next attempt.
    async fn rebuild(&self) -> Result<Arc<TourIndex>> {
        let started = Instant::now();
        let tours = fetch_all_tours(&self.source).await?;
        let entries = build_index(tours);
        let index = Arc::new(TourIndex {
            built_at: Instant::now(),
            entries,
        });

        tracing::info!(
            "Tour index rebuilt: {} entries in {:?}",
            index.entries.len(),
            started.elapsed()
        );

        *self.current.write().await = Some(index.clone());
        Ok(index)
    }
}
