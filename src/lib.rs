// Library exports for testing and reusability

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use cache::PlacesCache;
use services::google_places::GooglePlacesClient;
use services::poi_discovery::PoiDiscoveryService;
use std::sync::Arc;

// App state for sharing across the application
pub struct AppState {
    pub discovery: PoiDiscoveryService,
    pub places_client: GooglePlacesClient,
    pub cache: Arc<dyn PlacesCache>,
}
