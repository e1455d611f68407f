use crate::constants::PLACES_REQUEST_TIMEOUT_SECONDS;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, RawPlace, RouteDescription};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const GOOGLE_MAPS_API_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Search surface the POI discovery pipeline depends on. Kept behind a trait
/// so tests can inject a deterministic backend.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Nearby search: places of `place_type` within `radius_m` of `location`.
    async fn nearby_search(
        &self,
        location: &Coordinates,
        radius_m: f64,
        place_type: &str,
    ) -> Result<Vec<RawPlace>>;

    /// Free-text search biased around `location`.
    async fn text_search(
        &self,
        query: &str,
        location: &Coordinates,
        radius_m: f64,
    ) -> Result<Vec<RawPlace>>;
}

#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GooglePlacesClient {
    pub fn new(api_key: String) -> Self {
        Self::with_config(api_key, GOOGLE_MAPS_API_BASE_URL.to_string())
    }

    /// Override the API base URL (test servers, proxies).
    pub fn with_config(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(PLACES_REQUEST_TIMEOUT_SECONDS))
            .build()
            .unwrap_or_default();

        GooglePlacesClient {
            client,
            api_key,
            base_url,
        }
    }

    /// Fuller record for one place, used to resolve origin/destination
    /// selections to coordinates.
    pub async fn place_details(&self, place_id: &str) -> Result<RawPlace> {
        let url = format!("{}/place/details/json", self.base_url);

        tracing::debug!(place_id, "Place details request");

        let envelope: ResponseEnvelope<RawPlace> = self
            .get_json(
                &url,
                &[("place_id", place_id.to_string())],
                AppError::PlacesApi,
            )
            .await?;

        envelope.check_status(AppError::PlacesApi)?;
        envelope
            .result
            .ok_or_else(|| AppError::NotFound(format!("No details for place {}", place_id)))
    }

    /// Driving directions between two points with optional waypoints.
    /// Returns the first route, or an error when none exists.
    pub async fn directions(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
        waypoints: &[Coordinates],
    ) -> Result<RouteDescription> {
        let url = format!("{}/directions/json", self.base_url);

        let mut params = vec![
            ("origin", format_location(origin)),
            ("destination", format_location(destination)),
            ("mode", "driving".to_string()),
        ];
        if !waypoints.is_empty() {
            let joined = waypoints
                .iter()
                .map(format_location)
                .collect::<Vec<_>>()
                .join("|");
            params.push(("waypoints", joined));
        }

        tracing::debug!(
            origin = %format_location(origin),
            destination = %format_location(destination),
            waypoints = waypoints.len(),
            "Directions request"
        );

        let envelope: ResponseEnvelope<RawPlace> = self
            .get_json(&url, &params, AppError::DirectionsApi)
            .await?;

        envelope.check_status(AppError::DirectionsApi)?;

        let mut routes = envelope.routes.unwrap_or_default();
        if routes.is_empty() {
            tracing::warn!("Directions backend returned 0 routes");
            return Err(AppError::DirectionsApi("No routes found".to_string()));
        }
        Ok(routes.remove(0))
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        params: &[(&str, String)],
        to_error: fn(String) -> AppError,
    ) -> Result<ResponseEnvelope<T>> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", &self.api_key)])
            .send()
            .await
            .map_err(|e| to_error(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, "Google API HTTP error: {}", error_text);
            return Err(to_error(format!("HTTP {}: {}", status, error_text)));
        }

        response
            .json()
            .await
            .map_err(|e| to_error(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesClient {
    async fn nearby_search(
        &self,
        location: &Coordinates,
        radius_m: f64,
        place_type: &str,
    ) -> Result<Vec<RawPlace>> {
        let url = format!("{}/place/nearbysearch/json", self.base_url);

        tracing::debug!(
            location = %format_location(location),
            radius_m,
            place_type,
            "Nearby search request"
        );

        let envelope: ResponseEnvelope<RawPlace> = self
            .get_json(
                &url,
                &[
                    ("location", format_location(location)),
                    ("radius", radius_m.to_string()),
                    ("type", place_type.to_string()),
                ],
                AppError::PlacesApi,
            )
            .await?;

        envelope.check_status(AppError::PlacesApi)?;
        Ok(envelope.results.unwrap_or_default())
    }

    async fn text_search(
        &self,
        query: &str,
        location: &Coordinates,
        radius_m: f64,
    ) -> Result<Vec<RawPlace>> {
        let url = format!("{}/place/textsearch/json", self.base_url);

        tracing::debug!(query, radius_m, "Text search request");

        let envelope: ResponseEnvelope<RawPlace> = self
            .get_json(
                &url,
                &[
                    ("query", query.to_string()),
                    ("location", format_location(location)),
                    ("radius", radius_m.to_string()),
                ],
                AppError::PlacesApi,
            )
            .await?;

        envelope.check_status(AppError::PlacesApi)?;
        Ok(envelope.results.unwrap_or_default())
    }
}

fn format_location(coords: &Coordinates) -> String {
    format!("{},{}", coords.lat, coords.lng)
}

// Google API response envelope: one `status` string plus a payload field
// whose name varies by endpoint.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ResponseEnvelope<T> {
    status: String,
    #[serde(default)]
    results: Option<Vec<T>>,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    routes: Option<Vec<RouteDescription>>,
    #[serde(default)]
    error_message: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    fn check_status(&self, to_error: fn(String) -> AppError) -> Result<()> {
        if self.status == "OK" || self.status == "ZERO_RESULTS" {
            return Ok(());
        }
        let detail = self
            .error_message
            .clone()
            .unwrap_or_else(|| "no error detail".to_string());
        Err(to_error(format!("status {}: {}", self.status, detail)))
    }
}
