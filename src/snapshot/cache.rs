//! Time-bounded caching of the warehouse snapshot.
//!
//! The cache is an explicit object holding `(snapshot, fetched_at)` and a
//! TTL; callers drive it through [`SnapshotCache::get_or_refresh`] with an
//! injected `now`, so freshness decisions are deterministic and testable.

use crate::snapshot::error::SnapshotError;
use crate::types::snapshot::Snapshot;
use log::{info, warn};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// How long a fetched snapshot stays fresh before the next render pass
/// triggers a refetch.
pub const SNAPSHOT_TTL: Duration = Duration::from_secs(600);

/// The one operation a snapshot source must provide.
///
/// [`crate::WarehouseClient`] is the production implementation; tests plug in
/// stubs to exercise the cache without a network.
pub trait FetchSnapshot {
    fn fetch_snapshot(
        &self,
    ) -> impl Future<Output = Result<Snapshot, SnapshotError>> + Send;
}

struct CachedSnapshot {
    snapshot: Snapshot,
    fetched_at: Instant,
}

/// Caches the most recent snapshot from a source for a bounded time window.
pub struct SnapshotCache<S> {
    source: S,
    ttl: Duration,
    slot: Mutex<Option<CachedSnapshot>>,
}

impl<S: FetchSnapshot> SnapshotCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached snapshot if it is younger than the TTL at `now`,
    /// otherwise fetches a fresh one and stores it keyed at `now`.
    ///
    /// The fetch runs outside the lock. If another caller stored a fresh
    /// snapshot while ours was in flight, theirs wins and ours is discarded.
    pub async fn get_or_refresh(&self, now: Instant) -> Result<Snapshot, SnapshotError> {
        {
            let slot = self.slot.lock().await;
            if let Some(cached) = slot.as_ref() {
                if now.duration_since(cached.fetched_at) < self.ttl {
                    info!("Snapshot cache hit ({} rows)", cached.snapshot.height());
                    return Ok(cached.snapshot.clone());
                }
            }
            // Stale or empty, release the lock before fetching
        }

        warn!("Snapshot cache miss or stale entry. Fetching from warehouse.");
        let snapshot = self.source.fetch_snapshot().await?;

        let mut slot = self.slot.lock().await;
        match slot.as_ref() {
            Some(cached) if now.duration_since(cached.fetched_at) < self.ttl => {
                Ok(cached.snapshot.clone())
            }
            _ => {
                *slot = Some(CachedSnapshot {
                    snapshot: snapshot.clone(),
                    fetched_at: now,
                });
                Ok(snapshot)
            }
        }
    }
}
