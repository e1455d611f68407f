use crate::error::{AppError, Result};
use crate::models::itinerary::{DiscoverPoisRequest, DiscoverPoisResponse};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /pois/discover
/// Discover, filter, and rank POIs along sampled route anchors.
pub async fn discover_pois(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DiscoverPoisRequest>,
) -> Result<Json<DiscoverPoisResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        route_points = request.route_points.len(),
        preference = %request.preference,
        budget = %request.budget,
        origin_lat = request.origin.lat,
        origin_lng = request.origin.lng,
        "POI discovery request"
    );

    let outcome = state
        .discovery
        .discover(
            &request.route_points,
            &request.preference,
            &request.budget,
            &request.origin,
        )
        .await?;

    let count = outcome.pois.len();
    tracing::info!(count, "POI discovery returned results");

    Ok(Json(DiscoverPoisResponse {
        pois: outcome.pois,
        count,
        empty_categories: outcome.empty_categories,
    }))
}
