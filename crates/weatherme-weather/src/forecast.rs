//! Forecast provider client (Dark Sky compatible API shape).
//! Requests SI units so temperatures arrive in Celsius and wind in m/s.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{Coordinates, WeatherError};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Raw forecast payload, limited to the fields the skill speaks.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub currently: Currently,
    pub timezone: String,
    pub hourly: SummaryBlock,
    pub daily: SummaryBlock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currently {
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryBlock {
    pub summary: String,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ForecastClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch current conditions plus hourly/daily summaries for a coordinate.
    #[instrument(skip(self), level = "info")]
    pub async fn forecast(&self, coord: Coordinates) -> Result<ForecastPayload, WeatherError> {
        let url = format!(
            "{}/forecast/{}/{},{}?units=si",
            self.base_url, self.api_key, coord.lat, coord.lng,
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::ForecastUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(WeatherError::ForecastUnavailable(format!(
                "{}: {}",
                status, text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))
    }
}
