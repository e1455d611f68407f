use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub google_api_key: String,
    /// Override for the places/directions API base URL (proxies, test servers).
    pub places_base_url: Option<String>,
    pub places_cache_ttl: u64,
    pub places_cache_max_entries: u64,
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Search radius (meters) for nearby/text searches around each anchor
    pub search_radius_m: f64,

    /// Nearby-search result count below which a text search supplements
    /// the same (anchor, category) pair
    pub text_search_threshold: usize,

    /// Maximum POIs kept per category bucket after scoring
    pub top_k_per_category: usize,

    /// Upper bound on concurrent (anchor, category) fetches
    pub max_concurrent_fetches: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_radius_m: DEFAULT_SEARCH_RADIUS_METERS,
            text_search_threshold: DEFAULT_TEXT_SEARCH_THRESHOLD,
            top_k_per_category: DEFAULT_TOP_K_PER_CATEGORY,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

impl DiscoveryConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            search_radius_m: env::var("POI_SEARCH_RADIUS_M")
                .unwrap_or_else(|_| defaults.search_radius_m.to_string())
                .parse()
                .map_err(|_| "Invalid POI_SEARCH_RADIUS_M")?,

            text_search_threshold: env::var("POI_TEXT_SEARCH_THRESHOLD")
                .unwrap_or_else(|_| defaults.text_search_threshold.to_string())
                .parse()
                .map_err(|_| "Invalid POI_TEXT_SEARCH_THRESHOLD")?,

            top_k_per_category: env::var("POI_TOP_K_PER_CATEGORY")
                .unwrap_or_else(|_| defaults.top_k_per_category.to_string())
                .parse()
                .map_err(|_| "Invalid POI_TOP_K_PER_CATEGORY")?,

            max_concurrent_fetches: env::var("POI_MAX_CONCURRENT_FETCHES")
                .unwrap_or_else(|_| defaults.max_concurrent_fetches.to_string())
                .parse()
                .map_err(|_| "Invalid POI_MAX_CONCURRENT_FETCHES")?,
        };

        if config.search_radius_m <= 0.0 || config.search_radius_m > 50_000.0 {
            return Err("POI_SEARCH_RADIUS_M must be between 0 and 50000 meters".to_string());
        }
        if config.top_k_per_category == 0 {
            return Err("POI_TOP_K_PER_CATEGORY must be at least 1".to_string());
        }
        if config.max_concurrent_fetches == 0 {
            return Err("POI_MAX_CONCURRENT_FETCHES must be at least 1".to_string());
        }

        Ok(config)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            google_api_key: env::var("GOOGLE_PLACES_API_KEY")
                .map_err(|_| "GOOGLE_PLACES_API_KEY must be set")?,
            places_base_url: env::var("GOOGLE_PLACES_BASE_URL").ok(),
            places_cache_ttl: env::var("PLACES_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_PLACES_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid PLACES_CACHE_TTL")?,
            places_cache_max_entries: env::var("PLACES_CACHE_MAX_ENTRIES")
                .unwrap_or_else(|_| DEFAULT_PLACES_CACHE_MAX_ENTRIES.to_string())
                .parse()
                .map_err(|_| "Invalid PLACES_CACHE_MAX_ENTRIES")?,
            discovery: DiscoveryConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
