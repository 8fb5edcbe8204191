//! Forward geocoding: convert a free-text place name to coordinates.
//! Uses the Google Maps geocoding API response shape.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{Coordinates, WeatherError};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(base_url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a place name to the first match's coordinates.
    ///
    /// An empty result set is `GeocodeNotFound`; there is no fallback.
    #[instrument(skip(self), level = "info")]
    pub async fn geocode(&self, location: &str) -> Result<Coordinates, WeatherError> {
        let url = format!(
            "{}{}?address={}",
            self.base_url,
            GEOCODE_PATH,
            urlencoding::encode(location),
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        match body.results.first() {
            Some(result) => {
                let coord = result.geometry.location;
                tracing::debug!(lat = coord.lat, lng = coord.lng, "geocoded location");
                Ok(coord)
            }
            None => Err(WeatherError::GeocodeNotFound(location.to_string())),
        }
    }
}
