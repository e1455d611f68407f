use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// A driving route as returned by the directions backend: ordered legs of
/// ordered steps. Read-only input to the route sampler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteDescription {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub steps: Vec<RouteStep>,
    pub end_location: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<TextValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<TextValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStep {
    pub start_location: Coordinates,
}

/// Display text plus raw value, the way the directions backend reports
/// distances and durations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextValue {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct DirectionsRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    #[serde(default)]
    pub waypoints: Vec<Coordinates>,
}

impl DirectionsRequest {
    pub fn validate(&self) -> Result<(), String> {
        for point in [&self.origin, &self.destination]
            .into_iter()
            .chain(self.waypoints.iter())
        {
            Coordinates::new(point.lat, point.lng)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct DirectionsResponse {
    /// Sampled anchor coordinates, ready to feed into POI discovery.
    pub route_points: Vec<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_request_validation() {
        let mut req = DirectionsRequest {
            origin: Coordinates {
                lat: 12.9716,
                lng: 77.5946,
            },
            destination: Coordinates {
                lat: 12.9352,
                lng: 77.6245,
            },
            waypoints: vec![],
        };
        assert!(req.validate().is_ok());

        req.waypoints.push(Coordinates {
            lat: 95.0,
            lng: 0.0,
        });
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_route_description_deserializes_backend_shape() {
        let json = serde_json::json!({
            "legs": [{
                "steps": [
                    {"start_location": {"lat": 12.97, "lng": 77.59}},
                    {"start_location": {"lat": 12.96, "lng": 77.60}}
                ],
                "end_location": {"lat": 12.94, "lng": 77.62},
                "distance": {"text": "7.4 km", "value": 7400.0},
                "duration": {"text": "25 mins", "value": 1500.0}
            }]
        });

        let route: RouteDescription = serde_json::from_value(json).unwrap();
        assert_eq!(route.legs.len(), 1);
        assert_eq!(route.legs[0].steps.len(), 2);
        assert_eq!(route.legs[0].distance.as_ref().unwrap().text, "7.4 km");
    }
}
