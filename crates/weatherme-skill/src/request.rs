//! Inbound speechlet event shapes, as delivered by the hosting runtime.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One event, received once per invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundEvent {
    pub session: Session,
    pub request: Request,
}

/// Per-turn conversation state. Attributes are round-tripped explicitly in
/// the response envelope; there is no server-side session store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The request half of the event, tagged by type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest", rename_all = "camelCase")]
    Launch { request_id: String },

    #[serde(rename = "IntentRequest", rename_all = "camelCase")]
    Intent { request_id: String, intent: Intent },

    #[serde(rename = "SessionEndedRequest", rename_all = "camelCase")]
    SessionEnded {
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
}

/// A named user request with slot values extracted by the platform's NLU.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// The value of a slot, if present and filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|s| s.value.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub value: Option<String>,
}
