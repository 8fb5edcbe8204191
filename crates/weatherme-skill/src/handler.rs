//! Request dispatcher: routes one inbound event to its intent handler and
//! wraps the result in a response envelope.

use serde_json::{Map, Value};
use tracing::instrument;

use weatherme_core::Config;
use weatherme_weather::{
    ForecastClient, GeocodeClient, WeatherError, WeatherQuery, WeatherReport, WeatherService,
};

use crate::error::SkillError;
use crate::request::{InboundEvent, Intent, Request};
use crate::response::{ask, tell, ResponseEnvelope, Speech};

const CITY_SLOT: &str = "cityName";

const WELCOME_SPEECH: &str = "Hello JD Happy to find out weather status for you";
const WELCOME_REPROMPT: &str =
    "Ask me for the weather in a city, for example, say weather in Sydney";
const GOODBYE_SPEECH: &str = "Goodbye";

/// The closed set of intents this skill answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIntent {
    Forecast,
    ForecastToday,
    ForecastWeek,
    Help,
    Stop,
    Cancel,
}

impl SkillIntent {
    /// Decode an intent name from the platform's NLU layer.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Forecast" => Some(Self::Forecast),
            "ForecastToday" => Some(Self::ForecastToday),
            "ForecastWeek" => Some(Self::ForecastWeek),
            "AMAZON.HelpIntent" => Some(Self::Help),
            "AMAZON.StopIntent" => Some(Self::Stop),
            "AMAZON.CancelIntent" => Some(Self::Cancel),
            _ => None,
        }
    }
}

pub struct Skill {
    weather: WeatherService,
}

impl Skill {
    pub fn new(weather: WeatherService) -> Self {
        Self { weather }
    }

    /// Build the skill and its provider clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let geocode = GeocodeClient::new(&config.geocode.base_url)?;
        let forecast = ForecastClient::new(&config.forecast.base_url, &config.forecast.api_key)?;
        Ok(Self::new(WeatherService::new(
            geocode,
            forecast,
            config.default_location.clone(),
        )))
    }

    /// Handle one inbound event and produce the response envelope.
    ///
    /// Every error aborts the turn; nothing is retried or downgraded to a
    /// partial response.
    #[instrument(skip(self, event), level = "info")]
    pub async fn handle(&self, event: InboundEvent) -> Result<ResponseEnvelope, SkillError> {
        if event.session.new {
            // Audit hook: no state change, session init would go here.
            tracing::info!(
                session_id = %event.session.session_id,
                application_id = %event.session.application.application_id,
                "session started"
            );
        }

        let attributes = event.session.attributes;

        match event.request {
            Request::Launch { request_id } => {
                tracing::info!(%request_id, "launch request");
                Ok(ResponseEnvelope::new(attributes, welcome()?))
            }
            Request::Intent { request_id, intent } => {
                tracing::info!(%request_id, intent = %intent.name, "intent request");
                self.on_intent(intent, attributes).await
            }
            Request::SessionEnded { request_id, reason } => {
                tracing::info!(%request_id, ?reason, "session ended");
                Ok(ResponseEnvelope::acknowledgment(attributes))
            }
        }
    }

    async fn on_intent(
        &self,
        intent: Intent,
        attributes: Map<String, Value>,
    ) -> Result<ResponseEnvelope, SkillError> {
        let skill_intent = SkillIntent::from_name(&intent.name)
            .ok_or_else(|| SkillError::UnknownIntent(intent.name.clone()))?;

        let response = match skill_intent {
            SkillIntent::Help => welcome()?,
            SkillIntent::Stop | SkillIntent::Cancel => tell(Speech::plain(GOODBYE_SPEECH))?,
            SkillIntent::Forecast | SkillIntent::ForecastToday | SkillIntent::ForecastWeek => {
                let query = WeatherQuery::new(intent.slot_value(CITY_SLOT).unwrap_or_default());

                let report = match self.weather.lookup(&query).await {
                    Ok(report) => report,
                    Err(WeatherError::GeocodeNotFound(location)) => {
                        // Speak an apology instead of failing the turn with
                        // no output at all.
                        let apology = format!(
                            "Sorry, I couldn't find a place called {}. ",
                            location
                        );
                        return Ok(ResponseEnvelope::new(
                            attributes,
                            tell(Speech::plain(apology))?,
                        ));
                    }
                    Err(e) => return Err(e.into()),
                };

                tell(Speech::plain(speech_for(skill_intent, &report)))?
            }
        };

        Ok(ResponseEnvelope::new(attributes, response))
    }
}

/// Welcome/help response. Keeps the session open; byte-identical on every
/// invocation.
fn welcome() -> Result<crate::response::SpeechletResponse, SkillError> {
    ask(
        Speech::plain(WELCOME_SPEECH),
        Speech::plain(WELCOME_REPROMPT),
    )
}

/// Concatenate the phrase subset each intent speaks.
fn speech_for(intent: SkillIntent, report: &WeatherReport) -> String {
    match intent {
        SkillIntent::Forecast => format!(
            "{}{}{}{}",
            report.temperature.speech,
            report.wind_speed.speech,
            report.apparent_temperature.speech,
            report.timezone.speech,
        ),
        SkillIntent::ForecastToday => report.hourly_summary.speech.clone(),
        SkillIntent::ForecastWeek => report.daily_summary.speech.clone(),
        // Non-weather intents never reach here
        SkillIntent::Help | SkillIntent::Stop | SkillIntent::Cancel => String::new(),
    }
}
