use crate::models::{FilteredPoi, PoiRef, ValidationResult};

/// Check what fraction of the supplied POIs the itinerary narrative actually
/// references, by case-insensitive verbatim name lookup.
///
/// A coarse presence check, not semantic verification: it cannot spot places
/// the narrative invented, only whether the supplied list was ignored.
/// `is_valid` is false only when POIs were supplied and none appear.
pub fn validate_itinerary(text: &str, pois: &[FilteredPoi]) -> ValidationResult {
    let haystack = text.to_lowercase();

    let used: Vec<PoiRef> = pois
        .iter()
        .filter(|poi| {
            let needle = poi.name.trim().to_lowercase();
            !needle.is_empty() && haystack.contains(&needle)
        })
        .map(|poi| PoiRef {
            name: poi.name.clone(),
            place_id: poi.place_id.clone(),
        })
        .collect();

    let used_count = used.len();
    let total_available = pois.len();
    let is_valid = !(total_available > 0 && used_count == 0);

    let message = if is_valid {
        format!(
            "Itinerary references {} of {} supplied POIs",
            used_count, total_available
        )
    } else {
        format!(
            "Itinerary references none of the {} supplied POIs; the narrative likely ignored its input",
            total_available
        )
    };

    ValidationResult {
        used,
        used_count,
        total_available,
        is_valid,
        message,
    }
}
