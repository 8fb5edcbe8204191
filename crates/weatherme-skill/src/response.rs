//! Response envelope construction: the ask/tell primitives every handler
//! uses, plus the versioned outer envelope.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SkillError;

/// A unit of rendered speech: text plus its markup format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speech {
    Plain(String),
    Ssml(String),
}

impl Speech {
    pub fn plain(text: impl Into<String>) -> Self {
        Speech::Plain(text.into())
    }

    pub fn ssml(markup: impl Into<String>) -> Self {
        Speech::Ssml(markup.into())
    }

    fn text(&self) -> &str {
        match self {
            Speech::Plain(t) | Speech::Ssml(t) => t,
        }
    }
}

/// Wire shape of a speech unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "PlainText")]
    Plain { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl From<Speech> for OutputSpeech {
    fn from(speech: Speech) -> Self {
        match speech {
            Speech::Plain(text) => OutputSpeech::Plain { text },
            Speech::Ssml(ssml) => OutputSpeech::Ssml { ssml },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

/// Build a response that keeps the session open and sets a reprompt.
pub fn ask(speech: Speech, reprompt: Speech) -> Result<SpeechletResponse, SkillError> {
    validate(&speech)?;
    validate(&reprompt)?;
    Ok(SpeechletResponse {
        output_speech: speech.into(),
        reprompt: Some(Reprompt {
            output_speech: reprompt.into(),
        }),
        should_end_session: false,
    })
}

/// Build a final response that ends the session. No reprompt.
pub fn tell(speech: Speech) -> Result<SpeechletResponse, SkillError> {
    validate(&speech)?;
    Ok(SpeechletResponse {
        output_speech: speech.into(),
        reprompt: None,
        should_end_session: true,
    })
}

fn validate(speech: &Speech) -> Result<(), SkillError> {
    if speech.text().trim().is_empty() {
        return Err(SkillError::InvalidSpeechOutput(
            "speech text must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// The outer envelope returned to the hosting runtime.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SpeechletResponse>,
}

impl ResponseEnvelope {
    /// Envelope carrying a speechlet response plus round-tripped attributes.
    pub fn new(session_attributes: Map<String, Value>, response: SpeechletResponse) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes,
            response: Some(response),
        }
    }

    /// Empty acknowledgment (session-ended notifications carry no speech).
    pub fn acknowledgment(session_attributes: Map<String, Value>) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes,
            response: None,
        }
    }
}
