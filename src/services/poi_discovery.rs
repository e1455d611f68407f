use crate::cache::{nearby_search_cache_key, PlacesCache};
use crate::config::DiscoveryConfig;
use crate::error::{AppError, Result};
use crate::models::preference::{price_levels_for, profile_for};
use crate::models::{Coordinates, FilteredPoi, RawPlace};
use crate::services::google_places::PlacesApi;
use crate::services::{poi_filter, poi_scoring};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;

/// Final output of one discovery run.
#[derive(Debug)]
pub struct DiscoveryOutcome {
    pub pois: Vec<FilteredPoi>,
    pub empty_categories: Vec<String>,
}

/// Runs the full POI pipeline: fetch candidates around each route anchor for
/// each category term, deduplicate, filter, bucket, score, and cap.
pub struct PoiDiscoveryService {
    places: Arc<dyn PlacesApi>,
    cache: Arc<dyn PlacesCache>,
    config: DiscoveryConfig,
}

impl PoiDiscoveryService {
    pub fn new(
        places: Arc<dyn PlacesApi>,
        cache: Arc<dyn PlacesCache>,
        config: DiscoveryConfig,
    ) -> Self {
        PoiDiscoveryService {
            places,
            cache,
            config,
        }
    }

    /// Discover, filter, and rank POIs along the sampled route anchors.
    ///
    /// Per-fetch failures are absorbed; the call errors only when upstream
    /// failures cascaded to zero candidates overall. Empty anchor sequences
    /// yield a well-formed empty outcome.
    pub async fn discover(
        &self,
        anchors: &[Coordinates],
        preference: &str,
        budget: &str,
        origin: &Coordinates,
    ) -> Result<DiscoveryOutcome> {
        let categories = profile_for(preference);
        let allowed_price_levels = price_levels_for(budget);

        tracing::info!(
            anchors = anchors.len(),
            preference,
            budget,
            categories = ?categories,
            "Starting POI discovery"
        );

        let (candidates, failed_fetches) = self.aggregate(anchors, categories).await;

        if candidates.is_empty() && failed_fetches > 0 {
            return Err(AppError::NoPoisDiscovered(format!(
                "No POIs discovered: {} of {} fetches failed",
                failed_fetches,
                anchors.len() * categories.len()
            )));
        }

        let buckets = poi_filter::filter_and_categorize(&candidates, categories, allowed_price_levels);
        let selection = poi_scoring::select_top(buckets, origin, self.config.top_k_per_category);

        tracing::info!(
            candidates = candidates.len(),
            selected = selection.pois.len(),
            empty_categories = ?selection.empty_categories,
            "POI discovery complete"
        );

        Ok(DiscoveryOutcome {
            pois: selection.pois,
            empty_categories: selection.empty_categories,
        })
    }

    /// Fetch the anchors × categories cross-product and merge, deduplicating
    /// by place_id (first occurrence wins).
    ///
    /// Pairs are iterated anchors-major, categories-minor; fetches run with
    /// bounded concurrency but results are merged in input order, so the
    /// first-wins tie-break stays deterministic regardless of completion
    /// order. Returns the merged candidates and the failed-fetch count.
    pub async fn aggregate(
        &self,
        anchors: &[Coordinates],
        categories: &[&str],
    ) -> (Vec<RawPlace>, usize) {
        let pairs: Vec<(Coordinates, &str)> = anchors
            .iter()
            .flat_map(|anchor| categories.iter().map(move |term| (*anchor, *term)))
            .collect();

        let fetches: Vec<_> = pairs
            .iter()
            .map(|(anchor, term)| self.fetch_candidates(anchor, term))
            .collect();
        let results: Vec<Result<Vec<RawPlace>>> = stream::iter(fetches)
            .buffered(self.config.max_concurrent_fetches.max(1))
            .collect()
            .await;

        let mut seen_ids = HashSet::new();
        let mut merged = Vec::new();
        let mut failed_fetches = 0usize;

        for ((anchor, term), result) in pairs.iter().zip(results) {
            match result {
                Ok(places) => {
                    for place in places {
                        if seen_ids.insert(place.place_id.clone()) {
                            merged.push(place);
                        }
                    }
                }
                Err(e) => {
                    failed_fetches += 1;
                    tracing::warn!(
                        lat = anchor.lat,
                        lng = anchor.lng,
                        category = term,
                        "Fetch failed, pair contributes zero POIs: {}",
                        e
                    );
                }
            }
        }

        tracing::debug!(
            pairs = pairs.len(),
            failed = failed_fetches,
            unique = merged.len(),
            "Aggregated candidate places"
        );

        (merged, failed_fetches)
    }

    /// Candidates for one (anchor, category) pair.
    ///
    /// The nearby search is memoized; when it returns fewer results than the
    /// threshold, a text search supplements it. Fallback failures are
    /// swallowed (zero supplements); results are appended without dedup,
    /// which happens once at the aggregation stage.
    async fn fetch_candidates(&self, anchor: &Coordinates, category: &str) -> Result<Vec<RawPlace>> {
        let radius = self.config.search_radius_m;
        let cache_key = nearby_search_cache_key(anchor, category, radius);

        let mut results = match self.cache.get_places(&cache_key).await {
            Some(cached) => cached,
            None => {
                let fetched = self.places.nearby_search(anchor, radius, category).await?;
                self.cache.store_places(&cache_key, &fetched).await;
                fetched
            }
        };

        if results.len() < self.config.text_search_threshold {
            let query = format!("{} near {},{}", category, anchor.lat, anchor.lng);
            match self.places.text_search(&query, anchor, radius).await {
                Ok(mut supplements) => {
                    tracing::debug!(
                        category,
                        primary = results.len(),
                        supplements = supplements.len(),
                        "Text search supplemented sparse nearby results"
                    );
                    results.append(&mut supplements);
                }
                Err(e) => {
                    tracing::warn!(category, "Text search fallback failed, skipping: {}", e);
                }
            }
        }

        Ok(results)
    }
}
