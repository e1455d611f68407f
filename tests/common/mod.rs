use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tripscout::cache::MemoryCacheService;
use tripscout::config::DiscoveryConfig;
use tripscout::error::{AppError, Result};
use tripscout::models::place::{OpeningHours, PlaceGeometry};
use tripscout::models::{BusinessStatus, Coordinates, FilteredPoi, RawPlace};
use tripscout::services::google_places::{GooglePlacesClient, PlacesApi};
use tripscout::services::poi_discovery::PoiDiscoveryService;
use tripscout::AppState;

/// Deterministic places backend: nearby results keyed by category term.
#[allow(dead_code)]
#[derive(Default)]
pub struct ScriptedPlacesApi {
    /// Nearby results returned per category term.
    pub nearby_by_category: HashMap<String, Vec<RawPlace>>,
    /// Text-search supplements returned per category term (queries start
    /// with the term).
    pub text_by_category: HashMap<String, Vec<RawPlace>>,
    /// When true, every nearby search fails.
    pub fail_nearby: bool,
    /// When true, every text search fails.
    pub fail_text: bool,
}

#[async_trait]
impl PlacesApi for ScriptedPlacesApi {
    async fn nearby_search(
        &self,
        _location: &Coordinates,
        _radius_m: f64,
        place_type: &str,
    ) -> Result<Vec<RawPlace>> {
        if self.fail_nearby {
            return Err(AppError::PlacesApi("scripted nearby outage".to_string()));
        }
        Ok(self
            .nearby_by_category
            .get(place_type)
            .cloned()
            .unwrap_or_default())
    }

    async fn text_search(
        &self,
        query: &str,
        _location: &Coordinates,
        _radius_m: f64,
    ) -> Result<Vec<RawPlace>> {
        if self.fail_text {
            return Err(AppError::PlacesApi("scripted text outage".to_string()));
        }
        let term = query.split(" near ").next().unwrap_or_default();
        Ok(self
            .text_by_category
            .get(term)
            .cloned()
            .unwrap_or_default())
    }
}

/// Create a raw place fixture with the fields the pipeline cares about.
#[allow(dead_code)]
pub fn make_raw_place(
    place_id: &str,
    name: &str,
    types: &[&str],
    rating: Option<f64>,
    price_level: Option<u8>,
    lat: f64,
    lng: f64,
) -> RawPlace {
    RawPlace {
        place_id: place_id.to_string(),
        name: Some(name.to_string()),
        geometry: PlaceGeometry {
            location: Coordinates::new(lat, lng).unwrap(),
        },
        rating,
        price_level,
        business_status: Some(BusinessStatus::Operational),
        permanently_closed: None,
        types: types.iter().map(|t| t.to_string()).collect(),
        formatted_address: Some(format!("{} Street", name)),
        vicinity: None,
        opening_hours: Some(OpeningHours {
            open_now: Some(true),
        }),
        user_ratings_total: Some(50),
    }
}

/// Create a filtered POI fixture for validator tests.
#[allow(dead_code)]
pub fn make_filtered_poi(name: &str, place_id: &str) -> FilteredPoi {
    FilteredPoi {
        name: name.to_string(),
        place_id: place_id.to_string(),
        location: Coordinates::new(12.97, 77.75).unwrap(),
        address: "Test Address".to_string(),
        rating: Some(4.0),
        user_ratings_total: Some(50),
        business_status: Some(BusinessStatus::Operational),
        open_now: Some(true),
        price_level: Some(2),
        types: vec!["restaurant".to_string()],
    }
}

/// Build a discovery service over a scripted backend.
#[allow(dead_code)]
pub fn make_discovery_service(api: ScriptedPlacesApi) -> PoiDiscoveryService {
    PoiDiscoveryService::new(
        Arc::new(api),
        Arc::new(MemoryCacheService::new(3600, 1000)),
        DiscoveryConfig::default(),
    )
}

/// Build app state over a scripted backend. The concrete places client
/// points at an unroutable address; endpoint tests that would reach it only
/// exercise request validation.
#[allow(dead_code)]
pub fn make_test_state(api: ScriptedPlacesApi) -> Arc<AppState> {
    let cache = Arc::new(MemoryCacheService::new(3600, 1000));
    let discovery = PoiDiscoveryService::new(
        Arc::new(api),
        cache.clone(),
        DiscoveryConfig::default(),
    );
    let places_client = GooglePlacesClient::with_config(
        "test-key".to_string(),
        "http://127.0.0.1:1/maps/api".to_string(),
    );

    Arc::new(AppState {
        discovery,
        places_client,
        cache,
    })
}
