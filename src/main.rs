use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripscout::cache::{MemoryCacheService, PlacesCache};
use tripscout::config::Config;
use tripscout::services::google_places::{GooglePlacesClient, PlacesApi};
use tripscout::services::poi_discovery::PoiDiscoveryService;
use tripscout::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripscout=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting tripscout API server");
    tracing::info!("Configuration loaded successfully");

    // Memoization cache for nearby searches
    let cache: Arc<dyn PlacesCache> = Arc::new(MemoryCacheService::new(
        config.places_cache_ttl,
        config.places_cache_max_entries,
    ));
    tracing::info!(
        ttl = config.places_cache_ttl,
        max_entries = config.places_cache_max_entries,
        "In-memory places cache initialized"
    );

    // Initialize services
    let places_client = if let Some(ref base_url) = config.places_base_url {
        GooglePlacesClient::with_config(config.google_api_key.clone(), base_url.clone())
    } else {
        GooglePlacesClient::new(config.google_api_key.clone())
    };
    let places_api: Arc<dyn PlacesApi> = Arc::new(places_client.clone());
    let discovery = PoiDiscoveryService::new(places_api, cache.clone(), config.discovery.clone());

    // Create application state
    let state = Arc::new(AppState {
        discovery,
        places_client,
        cache,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", tripscout::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
