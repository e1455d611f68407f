use crate::error::{AppError, Result};
use crate::models::RawPlace;
use crate::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ResolvePlaceRequest {
    pub place_id: String,
}

/// POST /places/resolve
/// Resolve a place identifier to its full record, used by callers to turn
/// origin/destination selections into coordinates.
pub async fn resolve_place(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResolvePlaceRequest>,
) -> Result<Json<RawPlace>> {
    if request.place_id.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "place_id must not be empty".to_string(),
        ));
    }

    tracing::info!(place_id = %request.place_id, "Place resolution request");

    let place = state.places_client.place_details(&request.place_id).await?;

    Ok(Json(place))
}
