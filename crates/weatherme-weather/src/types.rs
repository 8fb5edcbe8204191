use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastPayload;

/// A weather lookup request. An empty location means "use the configured
/// default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub location: String,
}

impl WeatherQuery {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Geographic coordinates from the geocoder's first match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A value paired with its pre-rendered speech phrase.
///
/// The phrase is derived from the value via a fixed template and is never
/// mutated independently; intent handlers concatenate the subset of phrases
/// relevant to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenValue<T> {
    pub value: T,
    pub speech: String,
}

impl<T> SpokenValue<T> {
    fn new(value: T, speech: String) -> Self {
        Self { value, speech }
    }
}

/// The transformed forecast payload: raw values plus speech phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Current temperature in degrees Celsius, rounded to the nearest integer
    pub temperature: SpokenValue<i64>,
    /// "Feels like" temperature in degrees Celsius, rounded
    pub apparent_temperature: SpokenValue<i64>,
    /// Wind speed in meters per second, unrounded
    pub wind_speed: SpokenValue<f64>,
    /// IANA timezone of the looked-up location
    pub timezone: SpokenValue<String>,
    /// Provider's summary of the next hours
    pub hourly_summary: SpokenValue<String>,
    /// Provider's summary of the next week
    pub daily_summary: SpokenValue<String>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Map the raw provider payload into speech-ready fields.
    pub fn from_payload(payload: &ForecastPayload) -> Self {
        let temperature = payload.currently.temperature.round() as i64;
        let apparent = payload.currently.apparent_temperature.round() as i64;
        let wind_speed = payload.currently.wind_speed;

        Self {
            temperature: SpokenValue::new(
                temperature,
                format!("It's currently {} degrees. ", temperature),
            ),
            apparent_temperature: SpokenValue::new(
                apparent,
                format!("You might feels like {} degrees. ", apparent),
            ),
            wind_speed: SpokenValue::new(
                wind_speed,
                format!("and the wind speed is {} Meters per second. ", wind_speed),
            ),
            timezone: SpokenValue::new(
                payload.timezone.clone(),
                format!("Your local timezone is {}. ", payload.timezone),
            ),
            hourly_summary: SpokenValue::new(
                payload.hourly.summary.clone(),
                format!("Today in summary {}", payload.hourly.summary),
            ),
            daily_summary: SpokenValue::new(
                payload.daily.summary.clone(),
                format!("This week in summary {}", payload.daily.summary),
            ),
            fetched_at: Utc::now(),
        }
    }
}

/// Weather pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("No geocoding match for location: {0}")]
    GeocodeNotFound(String),

    #[error("Forecast service unavailable: {0}")]
    ForecastUnavailable(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl WeatherError {
    /// User-friendly message suitable for a spoken or displayed reply.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::GeocodeNotFound(_) => "Location not found. Check and try again.",
            WeatherError::ForecastUnavailable(_) => {
                "Weather service unavailable. Please try again later."
            }
            WeatherError::Network(_) => "Network error. Check your connection.",
            WeatherError::Parse(_) => "Received an unexpected response. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{Currently, ForecastPayload, SummaryBlock};

    fn sydney_payload() -> ForecastPayload {
        ForecastPayload {
            currently: Currently {
                temperature: 21.4,
                apparent_temperature: 19.6,
                wind_speed: 3.2,
            },
            timezone: "Australia/Sydney".to_string(),
            hourly: SummaryBlock {
                summary: "Clear".to_string(),
            },
            daily: SummaryBlock {
                summary: "Mostly sunny".to_string(),
            },
        }
    }

    #[test]
    fn test_temperatures_rounded_to_nearest() {
        let report = WeatherReport::from_payload(&sydney_payload());
        assert_eq!(report.temperature.value, 21);
        assert_eq!(report.apparent_temperature.value, 20);
    }

    #[test]
    fn test_wind_speed_unrounded() {
        let report = WeatherReport::from_payload(&sydney_payload());
        assert_eq!(report.wind_speed.value, 3.2);
    }

    #[test]
    fn test_speech_phrases() {
        let report = WeatherReport::from_payload(&sydney_payload());
        assert_eq!(report.temperature.speech, "It's currently 21 degrees. ");
        assert_eq!(
            report.wind_speed.speech,
            "and the wind speed is 3.2 Meters per second. "
        );
        assert_eq!(
            report.apparent_temperature.speech,
            "You might feels like 20 degrees. "
        );
        assert_eq!(
            report.timezone.speech,
            "Your local timezone is Australia/Sydney. "
        );
        assert_eq!(report.hourly_summary.speech, "Today in summary Clear");
        assert_eq!(
            report.daily_summary.speech,
            "This week in summary Mostly sunny"
        );
    }

    #[test]
    fn test_summaries_pass_through() {
        let report = WeatherReport::from_payload(&sydney_payload());
        assert_eq!(report.hourly_summary.value, "Clear");
        assert_eq!(report.daily_summary.value, "Mostly sunny");
        assert_eq!(report.timezone.value, "Australia/Sydney");
    }

    #[test]
    fn test_error_user_messages() {
        let err = WeatherError::GeocodeNotFound("Atlantis".into());
        assert!(err.user_message().contains("not found"));

        let err = WeatherError::ForecastUnavailable("503".into());
        assert!(err.user_message().contains("unavailable"));
    }
}
