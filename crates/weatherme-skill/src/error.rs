//! Skill-specific error types.

use thiserror::Error;
use weatherme_weather::WeatherError;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Unrecognized intent: {0}")]
    UnknownIntent(String),

    #[error("Invalid speech output: {0}")]
    InvalidSpeechOutput(String),

    #[error("Weather lookup failed: {0}")]
    Weather(#[from] WeatherError),
}

impl SkillError {
    /// User-friendly message for the hosting runtime's failure channel.
    pub fn user_message(&self) -> &'static str {
        match self {
            SkillError::UnknownIntent(_) => "Sorry, I don't know how to help with that.",
            SkillError::InvalidSpeechOutput(_) => "Something went wrong. Please try again.",
            SkillError::Weather(e) => e.user_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_error_converts() {
        let err: SkillError = WeatherError::GeocodeNotFound("Atlantis".into()).into();
        assert!(matches!(
            err,
            SkillError::Weather(WeatherError::GeocodeNotFound(_))
        ));
    }

    #[test]
    fn test_user_message_propagation() {
        let err: SkillError = WeatherError::ForecastUnavailable("503".into()).into();
        assert_eq!(
            err.user_message(),
            "Weather service unavailable. Please try again later."
        );
    }
}
