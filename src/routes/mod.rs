pub mod debug;
pub mod directions;
pub mod discover;
pub mod places;
pub mod validate;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pois/discover", post(discover::discover_pois))
        .route("/itinerary/validate", post(validate::validate_itinerary))
        .route("/routes/directions", post(directions::get_directions))
        .route("/places/resolve", post(places::resolve_place))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
