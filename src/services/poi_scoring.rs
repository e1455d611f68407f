use crate::constants::{
    DEFAULT_RATING, DISTANCE_PENALTY_CAP, DISTANCE_PENALTY_WEIGHT, RATING_WEIGHT,
};
use crate::models::{CategoryBucket, Coordinates, FilteredPoi};

/// Outcome of scoring and capping the category buckets.
#[derive(Debug)]
pub struct Selection {
    /// Top-k POIs of every non-empty bucket, concatenated in bucket order.
    pub pois: Vec<FilteredPoi>,
    /// Category terms whose buckets held no POIs at all.
    pub empty_categories: Vec<String>,
}

/// Score each bucket's POIs and keep the top `k` per bucket.
///
/// The final order is deterministic: buckets in profile order, POIs by score
/// descending with ties broken by discovery order (stable sort).
pub fn select_top(buckets: Vec<CategoryBucket>, origin: &Coordinates, k: usize) -> Selection {
    let mut pois = Vec::new();
    let mut empty_categories = Vec::new();

    for bucket in buckets {
        if bucket.pois.is_empty() {
            tracing::debug!(category = %bucket.term, "No POIs survived for category");
            empty_categories.push(bucket.term);
            continue;
        }

        let mut scored: Vec<(f64, FilteredPoi)> = bucket
            .pois
            .into_iter()
            .map(|poi| (score_poi(&poi, origin), poi))
            .collect();

        // Stable sort keeps discovery order for equal scores
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        tracing::debug!(
            category = %bucket.term,
            candidates = scored.len(),
            kept = scored.len().min(k),
            "Selected top POIs for category"
        );

        pois.extend(scored.into_iter().take(k).map(|(_, poi)| poi));
    }

    Selection {
        pois,
        empty_categories,
    }
}

/// Rating-weighted, distance-penalized score, clamped to a floor of 0.
///
/// Rating dominates; the proximity penalty is capped so it can act only as a
/// tie-breaker and never invert a rating gap above 1.5 stars. Distance is
/// degree-space, acceptable for relative ranking within one local bucket.
pub fn score_poi(poi: &FilteredPoi, origin: &Coordinates) -> f64 {
    let rating = poi.rating.unwrap_or(DEFAULT_RATING);
    let distance_penalty =
        (poi.location.degree_distance_to(origin) * DISTANCE_PENALTY_WEIGHT).min(DISTANCE_PENALTY_CAP);

    (rating * RATING_WEIGHT - distance_penalty).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poi(place_id: &str, rating: Option<f64>, lat: f64, lng: f64) -> FilteredPoi {
        FilteredPoi {
            name: format!("Place {}", place_id),
            place_id: place_id.to_string(),
            location: Coordinates { lat, lng },
            address: "Somewhere".to_string(),
            rating,
            user_ratings_total: None,
            business_status: None,
            open_now: None,
            price_level: None,
            types: vec!["restaurant".to_string()],
        }
    }

    fn bucket(term: &str, pois: Vec<FilteredPoi>) -> CategoryBucket {
        CategoryBucket {
            term: term.to_string(),
            pois,
        }
    }

    #[test]
    fn test_higher_rating_scores_higher_at_equal_distance() {
        let origin = Coordinates { lat: 12.97, lng: 77.59 };
        let a = poi("a", Some(4.5), 12.98, 77.60);
        let b = poi("b", Some(4.0), 12.98, 77.60);

        assert!(score_poi(&a, &origin) > score_poi(&b, &origin));
    }

    #[test]
    fn test_closer_scores_at_least_as_high_at_equal_rating() {
        let origin = Coordinates { lat: 12.97, lng: 77.59 };
        let near = poi("a", Some(4.0), 12.98, 77.60);
        let far = poi("b", Some(4.0), 14.00, 78.50);

        assert!(score_poi(&near, &origin) >= score_poi(&far, &origin));
    }

    #[test]
    fn test_distance_penalty_is_capped() {
        let origin = Coordinates { lat: 0.0, lng: 0.0 };
        // Very far away: penalty saturates at the cap
        let remote = poi("a", Some(5.0), 40.0, 120.0);
        assert_eq!(score_poi(&remote, &origin), 5.0 * 20.0 - 30.0);

        // A capped penalty can never invert a rating gap above 1.5 stars
        let near_weak = poi("b", Some(3.4), 0.0, 0.0);
        assert!(score_poi(&remote, &origin) > score_poi(&near_weak, &origin));
    }

    #[test]
    fn test_score_never_negative() {
        let origin = Coordinates { lat: 0.0, lng: 0.0 };
        let bad_and_far = poi("a", Some(0.0), 40.0, 120.0);
        assert_eq!(score_poi(&bad_and_far, &origin), 0.0);
    }

    #[test]
    fn test_missing_rating_defaults_to_three() {
        let origin = Coordinates { lat: 12.97, lng: 77.59 };
        let unrated = poi("a", None, 12.97, 77.59);
        assert_eq!(score_poi(&unrated, &origin), 60.0);
    }

    #[test]
    fn test_top_k_bound_per_bucket() {
        let origin = Coordinates { lat: 12.97, lng: 77.59 };
        let many: Vec<FilteredPoi> = (0..8)
            .map(|i| poi(&format!("p{}", i), Some(4.0), 12.98, 77.60))
            .collect();
        let few: Vec<FilteredPoi> = (0..3)
            .map(|i| poi(&format!("q{}", i), Some(4.0), 12.98, 77.60))
            .collect();

        let selection = select_top(
            vec![bucket("restaurant", many), bucket("cafe", few)],
            &origin,
            5,
        );

        let restaurants = selection
            .pois
            .iter()
            .filter(|p| p.place_id.starts_with('p'))
            .count();
        let cafes = selection
            .pois
            .iter()
            .filter(|p| p.place_id.starts_with('q'))
            .count();
        assert_eq!(restaurants, 5);
        assert_eq!(cafes, 3);
    }

    #[test]
    fn test_empty_buckets_are_reported_and_skipped() {
        let origin = Coordinates { lat: 12.97, lng: 77.59 };
        let selection = select_top(
            vec![
                bucket("restaurant", vec![poi("a", Some(4.0), 12.98, 77.60)]),
                bucket("cafe", vec![]),
            ],
            &origin,
            5,
        );

        assert_eq!(selection.pois.len(), 1);
        assert_eq!(selection.empty_categories, vec!["cafe".to_string()]);
    }

    #[test]
    fn test_ranking_within_bucket_and_tie_break() {
        let origin = Coordinates { lat: 12.97, lng: 77.75 };
        // All at the same spot: only rating differentiates
        let pois = vec![
            poi("mid", Some(3.0), 12.97, 77.75),
            poi("best", Some(4.5), 12.97, 77.75),
            poi("good", Some(4.0), 12.97, 77.75),
            // Same rating as "good": discovery order breaks the tie
            poi("good_later", Some(4.0), 12.97, 77.75),
        ];

        let selection = select_top(vec![bucket("restaurant", pois)], &origin, 5);
        let ids: Vec<&str> = selection.pois.iter().map(|p| p.place_id.as_str()).collect();
        assert_eq!(ids, vec!["best", "good", "good_later", "mid"]);
    }
}
