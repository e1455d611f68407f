mod memory;

pub use memory::MemoryCacheService;

use crate::constants::CACHE_KEY_COORD_DECIMALS;
use crate::models::{Coordinates, RawPlace};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Memoization cache for nearby-search results.
///
/// The only shared mutable state in the pipeline; implementations must be
/// safe for concurrent read/insert since fetches run in parallel.
#[async_trait]
pub trait PlacesCache: Send + Sync {
    async fn get_places(&self, key: &str) -> Option<Vec<RawPlace>>;
    async fn store_places(&self, key: &str, places: &[RawPlace]);
    async fn get_stats(&self) -> CacheStats;
    fn backend_name(&self) -> &'static str;
}

/// Generate a cache key for a nearby search.
/// Key includes: anchor coordinates (4 decimal precision, ~10m), category
/// term, radius (100m buckets).
pub fn nearby_search_cache_key(anchor: &Coordinates, category: &str, radius_m: f64) -> String {
    let mut hasher = DefaultHasher::new();

    let rounded = anchor.round(CACHE_KEY_COORD_DECIMALS);
    let lat = (rounded.lat * 10_000.0).round() as i64;
    let lng = (rounded.lng * 10_000.0).round() as i64;
    let radius_bucket = (radius_m / 100.0).round() as i64;

    lat.hash(&mut hasher);
    lng.hash(&mut hasher);
    category.hash(&mut hasher);
    radius_bucket.hash(&mut hasher);

    format!("places:nearby:{:x}", hasher.finish())
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}
