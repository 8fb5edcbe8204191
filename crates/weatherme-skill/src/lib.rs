//! Skill layer for WeatherMe
//!
//! Decodes inbound speechlet events, routes them to intent handlers, and
//! builds the versioned response envelope the hosting runtime expects.

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use error::SkillError;
pub use handler::{Skill, SkillIntent};
pub use request::{InboundEvent, Intent, Request, Session, Slot};
pub use response::{ask, tell, OutputSpeech, ResponseEnvelope, Speech, SpeechletResponse};
