//! The lookup pipeline: geocode, then forecast, then phrase rendering.

use tracing::instrument;

use crate::forecast::ForecastClient;
use crate::geocode::GeocodeClient;
use crate::types::{WeatherError, WeatherQuery, WeatherReport};

#[derive(Debug, Clone)]
pub struct WeatherService {
    geocode: GeocodeClient,
    forecast: ForecastClient,
    default_location: String,
}

impl WeatherService {
    pub fn new(
        geocode: GeocodeClient,
        forecast: ForecastClient,
        default_location: impl Into<String>,
    ) -> Self {
        Self {
            geocode,
            forecast,
            default_location: default_location.into(),
        }
    }

    /// Run the full pipeline for a query.
    ///
    /// Strictly sequential: the forecast call is never issued when geocoding
    /// fails. An empty location substitutes the configured default before
    /// the geocoder is called.
    #[instrument(skip(self), level = "info")]
    pub async fn lookup(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let location = if query.location.trim().is_empty() {
            tracing::debug!(default = %self.default_location, "empty location, using default");
            self.default_location.as_str()
        } else {
            query.location.as_str()
        };

        let coord = self.geocode.geocode(location).await?;
        let payload = self.forecast.forecast(coord).await?;

        Ok(WeatherReport::from_payload(&payload))
    }
}
