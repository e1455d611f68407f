use crate::models::{CategoryBucket, FilteredPoi, RawPlace};

/// Filter raw places and assign survivors to category buckets.
///
/// Steps, in order: drop closed places, project to the minimal field set,
/// apply the budget predicate, then assign each survivor to the first
/// matching category. Places matching no category are dropped.
pub fn filter_and_categorize(
    raw: &[RawPlace],
    categories: &[&str],
    allowed_price_levels: &[u8],
) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = categories
        .iter()
        .map(|term| CategoryBucket {
            term: term.to_string(),
            pois: Vec::new(),
        })
        .collect();

    let mut dropped_closed = 0usize;
    let mut dropped_budget = 0usize;
    let mut dropped_unmatched = 0usize;

    for place in raw {
        let Some(poi) = FilteredPoi::from_raw(place) else {
            dropped_closed += 1;
            continue;
        };

        if !passes_budget(poi.price_level, allowed_price_levels) {
            dropped_budget += 1;
            continue;
        }

        match assign_bucket(&poi.types, categories) {
            Some(idx) => buckets[idx].pois.push(poi),
            None => dropped_unmatched += 1,
        }
    }

    tracing::debug!(
        total = raw.len(),
        dropped_closed,
        dropped_budget,
        dropped_unmatched,
        "Filtered and categorized places"
    );

    buckets
}

/// Budget predicate: places without a price level always pass.
pub fn passes_budget(price_level: Option<u8>, allowed: &[u8]) -> bool {
    match price_level {
        Some(level) => allowed.contains(&level),
        None => true,
    }
}

/// First-match-wins bucket assignment over the ordered category list.
///
/// Exact type membership is tried across all categories first; only then a
/// substring rescan in either containment direction (so "night_club" still
/// lands in a "club" bucket). The substring pass is a loose heuristic and can
/// claim generic terms aggressively; it runs last for that reason.
fn assign_bucket(types: &[String], categories: &[&str]) -> Option<usize> {
    categories
        .iter()
        .position(|cat| types.iter().any(|t| t == cat))
        .or_else(|| {
            categories.iter().position(|cat| {
                types
                    .iter()
                    .any(|t| t.contains(cat) || cat.contains(t.as_str()))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::place::PlaceGeometry;
    use crate::models::{BusinessStatus, Coordinates};

    fn place(place_id: &str, types: &[&str], price_level: Option<u8>) -> RawPlace {
        RawPlace {
            place_id: place_id.to_string(),
            name: Some(format!("Place {}", place_id)),
            geometry: PlaceGeometry {
                location: Coordinates::new(12.97, 77.75).unwrap(),
            },
            rating: Some(4.0),
            price_level,
            business_status: Some(BusinessStatus::Operational),
            permanently_closed: None,
            types: types.iter().map(|t| t.to_string()).collect(),
            formatted_address: Some("Somewhere".to_string()),
            vicinity: None,
            opening_hours: None,
            user_ratings_total: Some(10),
        }
    }

    #[test]
    fn test_budget_predicate() {
        let allowed = &[1, 2, 3];
        assert!(passes_budget(Some(2), allowed));
        assert!(!passes_budget(Some(4), allowed));
        assert!(!passes_budget(Some(0), allowed));
        // Absent price level is budget-neutral
        assert!(passes_budget(None, allowed));
    }

    #[test]
    fn test_closed_places_dropped_before_bucketing() {
        let mut closed = place("a", &["restaurant"], Some(2));
        closed.business_status = Some(BusinessStatus::ClosedTemporarily);
        let open = place("b", &["restaurant"], Some(2));

        let buckets = filter_and_categorize(&[closed, open], &["restaurant"], &[0, 1, 2, 3, 4]);
        assert_eq!(buckets[0].pois.len(), 1);
        assert_eq!(buckets[0].pois[0].place_id, "b");
    }

    #[test]
    fn test_exact_match_beats_substring_match() {
        // types contain both an exact match for the second category and a
        // substring match for the first; the exact pass wins
        let p = place("a", &["night_club", "bar"], None);
        let buckets = filter_and_categorize(&[p], &["club", "bar"], &[0, 1, 2, 3, 4]);

        assert!(buckets[0].pois.is_empty());
        assert_eq!(buckets[1].pois.len(), 1);
    }

    #[test]
    fn test_substring_match_both_directions() {
        // category term is a substring of the place type
        let p = place("a", &["night_club"], None);
        let buckets = filter_and_categorize(&[p], &["club"], &[0, 1, 2, 3, 4]);
        assert_eq!(buckets[0].pois.len(), 1);

        // place type is a substring of the category term
        let p = place("b", &["club"], None);
        let buckets = filter_and_categorize(&[p], &["night_club"], &[0, 1, 2, 3, 4]);
        assert_eq!(buckets[0].pois.len(), 1);
    }

    #[test]
    fn test_unmatched_places_dropped() {
        let p = place("a", &["gas_station"], None);
        let buckets = filter_and_categorize(&[p], &["restaurant", "cafe"], &[0, 1, 2, 3, 4]);
        assert!(buckets.iter().all(|b| b.pois.is_empty()));
    }

    #[test]
    fn test_first_match_wins_over_category_order() {
        // Matches both categories; assigned to the first in profile order
        let p = place("a", &["cafe", "restaurant"], None);
        let buckets = filter_and_categorize(&[p], &["restaurant", "cafe"], &[0, 1, 2, 3, 4]);
        assert_eq!(buckets[0].pois.len(), 1);
        assert!(buckets[1].pois.is_empty());
    }

    #[test]
    fn test_bucketing_is_deterministic() {
        let input: Vec<RawPlace> = (0..20)
            .map(|i| {
                let types: &[&str] = if i % 2 == 0 {
                    &["restaurant"]
                } else {
                    &["cafe"]
                };
                place(&format!("p{}", i), types, Some((i % 5) as u8))
            })
            .collect();
        let categories = &["restaurant", "cafe"];
        let allowed = &[1, 2, 3];

        let first = filter_and_categorize(&input, categories, allowed);
        let second = filter_and_categorize(&input, categories, allowed);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.term, b.term);
            let ids_a: Vec<&str> = a.pois.iter().map(|p| p.place_id.as_str()).collect();
            let ids_b: Vec<&str> = b.pois.iter().map(|p| p.place_id.as_str()).collect();
            assert_eq!(ids_a, ids_b);
        }
    }
}
