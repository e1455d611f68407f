use crate::cache::{CacheStats, PlacesCache};
use crate::models::RawPlace;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// In-memory memoization cache backed by moka with TTL and bounded capacity.
/// All methods are `&self` — no locking needed.
pub struct MemoryCacheService {
    places: Cache<String, Arc<Vec<RawPlace>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCacheService {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let places = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        MemoryCacheService {
            places,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl PlacesCache for MemoryCacheService {
    async fn get_places(&self, key: &str) -> Option<Vec<RawPlace>> {
        match self.places.get(key).await {
            Some(arc_places) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Memory cache hit for nearby search: {}", key);
                Some((*arc_places).clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Memory cache miss for nearby search: {}", key);
                None
            }
        }
    }

    async fn store_places(&self, key: &str, places: &[RawPlace]) {
        let arc_places = Arc::new(places.to_vec());
        self.places.insert(key.to_string(), arc_places).await;
        tracing::debug!("Memory cached {} places: {}", places.len(), key);
    }

    async fn get_stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let hit_rate = if hits + misses > 0 {
            (hits as f64 / (hits + misses) as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            hits,
            misses,
            hit_rate,
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
