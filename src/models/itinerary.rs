use crate::models::{Coordinates, FilteredPoi};
use serde::{Deserialize, Serialize};

// Request/Response types for the POI discovery and validation endpoints

#[derive(Debug, Deserialize)]
pub struct DiscoverPoisRequest {
    /// Anchor coordinates sampled along the route.
    #[serde(default)]
    pub route_points: Vec<Coordinates>,
    /// Preference label; unrecognized labels select the default profile.
    pub preference: String,
    /// Budget label; unrecognized labels allow all price levels.
    pub budget: String,
    /// Trip origin, used as the proximity reference for scoring.
    pub origin: Coordinates,
}

impl DiscoverPoisRequest {
    pub fn validate(&self) -> Result<(), String> {
        Coordinates::new(self.origin.lat, self.origin.lng)?;
        for point in &self.route_points {
            Coordinates::new(point.lat, point.lng)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct DiscoverPoisResponse {
    pub pois: Vec<FilteredPoi>,
    pub count: usize,
    /// Category terms that produced no surviving POIs.
    pub empty_categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateItineraryRequest {
    pub itinerary: String,
    #[serde(default)]
    pub pois: Vec<FilteredPoi>,
}

/// Reference to a POI found in the itinerary narrative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PoiRef {
    pub name: String,
    pub place_id: String,
}

/// Outcome of checking an itinerary narrative against the supplied POIs.
///
/// `is_valid == false` signals the narrative generator likely ignored its
/// input entirely; it is a data-quality flag, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub used: Vec<PoiRef>,
    pub used_count: usize,
    pub total_available: usize,
    pub is_valid: bool,
    pub message: String,
}
