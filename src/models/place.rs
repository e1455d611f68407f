use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// Operating status reported by the places backend.
///
/// Unknown upstream values deserialize to `Other` instead of failing the
/// whole response at the fetch boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceGeometry {
    pub location: Coordinates,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
}

/// A place record as returned by the places backend.
///
/// Everything except the identifier and location is optional; downstream
/// stages consume [`FilteredPoi`] and never re-check shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlace {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub geometry: PlaceGeometry,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub business_status: Option<BusinessStatus>,
    /// Legacy field predating `business_status`; still emitted for some
    /// long-closed places.
    #[serde(default)]
    pub permanently_closed: Option<bool>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
}

impl RawPlace {
    /// True when the place is known to be permanently or temporarily closed.
    pub fn is_closed(&self) -> bool {
        if self.permanently_closed == Some(true) {
            return true;
        }
        matches!(
            self.business_status,
            Some(BusinessStatus::ClosedTemporarily) | Some(BusinessStatus::ClosedPermanently)
        )
    }
}

/// Minimal projection of a [`RawPlace`] that survives filtering.
///
/// Invariant: never constructed from a closed place; [`FilteredPoi::from_raw`]
/// is the only construction site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredPoi {
    pub name: String,
    pub place_id: String,
    pub location: Coordinates,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_status: Option<BusinessStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl FilteredPoi {
    /// Project a raw place into the minimal field set, or `None` if the
    /// place is closed.
    pub fn from_raw(raw: &RawPlace) -> Option<Self> {
        if raw.is_closed() {
            return None;
        }

        let name = sanitize_ascii(raw.name.as_deref().unwrap_or(""), "Unknown Place");
        let address = raw
            .formatted_address
            .as_deref()
            .or(raw.vicinity.as_deref())
            .map(|a| sanitize_ascii(a, "Unknown Address"))
            .unwrap_or_else(|| "Unknown Address".to_string());

        Some(FilteredPoi {
            name,
            place_id: raw.place_id.clone(),
            location: raw.geometry.location,
            address,
            rating: raw.rating,
            user_ratings_total: raw.user_ratings_total,
            business_status: raw.business_status,
            open_now: raw.opening_hours.as_ref().and_then(|h| h.open_now),
            price_level: raw.price_level,
            types: raw.types.clone(),
        })
    }
}

/// Strip non-ASCII characters; substitute `fallback` when nothing survives.
fn sanitize_ascii(input: &str, fallback: &str) -> String {
    let cleaned: String = input.chars().filter(|c| c.is_ascii()).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Ordered group of filtered POIs sharing one category term.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBucket {
    pub term: String,
    pub pois: Vec<FilteredPoi>,
}
