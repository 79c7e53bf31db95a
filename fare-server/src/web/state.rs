//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, TimedCache};
use crate::fare::{FareTable, QuotaConfig};
use crate::store::JourneyStore;
use crate::zones::ZoneRegistry;

use super::dto::{FareRulesResponse, ZoneListResponse};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Journey history store
    pub store: Arc<dyn JourneyStore>,

    /// The network fare table
    pub table: Arc<FareTable>,

    /// Zone registry for display metadata
    pub registry: Arc<ZoneRegistry>,

    /// Daily quota configuration
    pub quota: QuotaConfig,

    /// Cached zone list response
    pub zones_cache: Arc<TimedCache<ZoneListResponse>>,

    /// Cached fare rules response
    pub rules_cache: Arc<TimedCache<FareRulesResponse>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        store: Arc<dyn JourneyStore>,
        table: FareTable,
        registry: ZoneRegistry,
        quota: QuotaConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            store,
            table: Arc::new(table),
            registry: Arc::new(registry),
            quota,
            zones_cache: Arc::new(TimedCache::new(cache_config.zones_ttl)),
            rules_cache: Arc::new(TimedCache::new(cache_config.rules_ttl)),
        }
    }
}
