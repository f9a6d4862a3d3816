//! Time-boxed reuse of the last successful aggregation.
//!
//! Purely a performance window: recomputing at any moment yields an
//! equivalent result. Aggregations whose remote fetch failed are served but
//! never stored, so the next request retries the remote.
//!
//! The slot is locked only to read or replace it. A refresh runs unlocked,
//! so concurrent misses each fetch on their own and never queue behind a
//! slow remote.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use folio_core::Aggregation;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

struct Cached {
    at: Instant,
    value: Arc<Aggregation>,
}

pub struct FeedCache {
    ttl: Duration,
    slot: Mutex<Option<Cached>>,
}

impl FeedCache {
    /// A zero `ttl` disables reuse.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: Mutex::new(None) }
    }

    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> Arc<Aggregation>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Aggregation>,
    {
        if let Some(value) = self.fresh().await {
            return value;
        }

        let value = Arc::new(refresh().await);
        if !self.ttl.is_zero() && !value.remote_failed {
            *self.slot.lock().await = Some(Cached { at: Instant::now(), value: value.clone() });
        }
        value
    }

    async fn fresh(&self) -> Option<Arc<Aggregation>> {
        let slot = self.slot.lock().await;
        let cached = slot.as_ref()?;
        let age = cached.at.elapsed();
        if age >= self.ttl {
            return None;
        }
        debug!(age_ms = age.as_millis() as u64, "serving cached aggregation");
        Some(cached.value.clone())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
