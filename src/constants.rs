//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For tuning knobs that benefit from runtime experimentation, see
//! [`DiscoveryConfig`](crate::config::DiscoveryConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- POI discovery defaults ---

/// Default search radius (meters) for nearby/text searches around each
/// route anchor. Overridden by `POI_SEARCH_RADIUS_M`.
pub const DEFAULT_SEARCH_RADIUS_METERS: f64 = 1500.0;
/// Minimum nearby-search result count below which the fetcher issues a
/// supplementary text search for the same anchor and category.
/// Overridden by `POI_TEXT_SEARCH_THRESHOLD`.
pub const DEFAULT_TEXT_SEARCH_THRESHOLD: usize = 5;
/// Maximum POIs kept per category bucket after scoring.
/// Overridden by `POI_TOP_K_PER_CATEGORY`.
pub const DEFAULT_TOP_K_PER_CATEGORY: usize = 5;
/// Upper bound on concurrent (anchor, category) fetches.
/// Overridden by `POI_MAX_CONCURRENT_FETCHES`.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;
/// Per-call timeout (seconds) for places/directions requests, so one stalled
/// fetch cannot block the rest of the cross-product.
pub const PLACES_REQUEST_TIMEOUT_SECONDS: u64 = 20;

// --- POI scoring coefficients ---
// score = (rating or DEFAULT_RATING) * RATING_WEIGHT
//       - min(degree_distance * DISTANCE_PENALTY_WEIGHT, DISTANCE_PENALTY_CAP)
// Rating dominates (0-100 range); the proximity penalty is capped so it can
// never invert a rating gap greater than 1.5 stars.

/// Rating assumed for places the backend returned without one.
pub const DEFAULT_RATING: f64 = 3.0;
/// Multiplier converting a 0-5 rating into the 0-100 score range.
pub const RATING_WEIGHT: f64 = 20.0;
/// Multiplier converting degree-space distance from the trip origin into a
/// score penalty.
pub const DISTANCE_PENALTY_WEIGHT: f64 = 10.0;
/// Hard cap on the distance penalty.
pub const DISTANCE_PENALTY_CAP: f64 = 30.0;

// --- Memoization cache defaults ---

/// Maximum entries for the in-memory nearby-search cache (LRU eviction).
/// Overridden by `PLACES_CACHE_MAX_ENTRIES`.
pub const DEFAULT_PLACES_CACHE_MAX_ENTRIES: u64 = 10_000;
/// Default nearby-search cache TTL: 1 hour. Overridden by `PLACES_CACHE_TTL`.
pub const DEFAULT_PLACES_CACHE_TTL_SECONDS: u64 = 3_600;

// --- Cache key precision ---

/// Decimal places kept when rounding anchor coordinates into cache keys
/// (~10m precision; anchors closer than that share a memoized result).
pub const CACHE_KEY_COORD_DECIMALS: u32 = 4;

// --- Fixed category fallback ---

/// Profile used when the preference label is not one of the recognized set.
pub const DEFAULT_CATEGORY_PROFILE: &[&str] = &["tourist_attraction", "restaurant"];
