//! Time-boxed caching for slow-changing HTTP responses.
//!
//! The zone registry and the fare rules never change at runtime, so their
//! rendered responses are cached with generous TTLs (the fare table gets a
//! longer one than the zone list, matching how often each could plausibly
//! be redeployed). A single-slot moka cache per endpoint keeps the TTL
//! machinery out of the handlers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

/// Configuration for response caching.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the zone list response (15 minutes).
    pub zones_ttl: Duration,

    /// TTL for the fare rules response (1 hour; rules don't change).
    pub rules_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            zones_ttl: Duration::from_secs(15 * 60),
            rules_ttl: Duration::from_secs(60 * 60),
        }
    }
}

/// A single cached value with a TTL.
///
/// Built on a one-entry moka cache so expiry and concurrent rebuilds are
/// handled by the cache rather than hand-rolled timestamps.
pub struct TimedCache<T> {
    inner: MokaCache<(), Arc<T>>,
}

impl<T: Send + Sync + 'static> TimedCache<T> {
    /// Create a cache holding one value for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let inner = MokaCache::builder()
            .time_to_live(ttl)
            .max_capacity(1)
            .build();
        Self { inner }
    }

    /// Get the cached value, rebuilding it with `build` if absent or
    /// expired. Concurrent callers share one rebuild.
    pub async fn get_or_insert_with(&self, build: impl FnOnce() -> T) -> Arc<T> {
        self.inner.get_with((), async { Arc::new(build()) }).await
    }

    /// Get the cached value without rebuilding.
    pub async fn get(&self) -> Option<Arc<T>> {
        self.inner.get(&()).await
    }

    /// Drop the cached value; the next read rebuilds.
    pub fn invalidate(&self) {
        self.inner.invalidate_all();
    }
}
