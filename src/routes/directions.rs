use crate::error::{AppError, Result};
use crate::models::route::{DirectionsRequest, DirectionsResponse};
use crate::services::route_sampler;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes/directions
/// Fetch a driving route and sample it into anchor coordinates for discovery.
pub async fn get_directions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DirectionsRequest>,
) -> Result<Json<DirectionsResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        origin_lat = request.origin.lat,
        origin_lng = request.origin.lng,
        destination_lat = request.destination.lat,
        destination_lng = request.destination.lng,
        waypoints = request.waypoints.len(),
        "Directions request"
    );

    let route = state
        .places_client
        .directions(&request.origin, &request.destination, &request.waypoints)
        .await?;

    let route_points = route_sampler::sample_route(&route);

    // Distance/duration display text comes from the first leg, matching how
    // the trip summary is presented to the user
    let first_leg = route.legs.first();
    let distance_text = first_leg.and_then(|l| l.distance.as_ref()).map(|d| d.text.clone());
    let duration_text = first_leg.and_then(|l| l.duration.as_ref()).map(|d| d.text.clone());

    tracing::info!(anchors = route_points.len(), "Route sampled into anchors");

    Ok(Json(DirectionsResponse {
        route_points,
        distance_text,
        duration_text,
    }))
}
