use crate::models::itinerary::ValidateItineraryRequest;
use crate::models::ValidationResult;
use crate::services::itinerary_validator;
use axum::Json;

/// POST /itinerary/validate
/// Check which of the supplied POIs a generated itinerary actually mentions.
pub async fn validate_itinerary(
    Json(request): Json<ValidateItineraryRequest>,
) -> Json<ValidationResult> {
    let result = itinerary_validator::validate_itinerary(&request.itinerary, &request.pois);

    tracing::info!(
        used = result.used_count,
        total = result.total_available,
        is_valid = result.is_valid,
        "Itinerary validation complete"
    );

    Json(result)
}
